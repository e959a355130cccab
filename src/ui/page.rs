use crate::data::filter::YearRange;
use crate::ui::chart::ChartMode;

// ---------------------------------------------------------------------------
// Page text blocks
// ---------------------------------------------------------------------------

pub const TITLE: &str = "Kliimaandmed";
pub const SUBTITLE: &str = "Interaktiivne rakendus kliimaandmetes orienteerumiseks.";
pub const DROPDOWN_CAPTION: &str = "Vali graafik:";
pub const SLIDER_CAPTION: &str = "Vali ajavahemik:";
pub const TABLE_CAPTION: &str = "Andmetabeli alla laadimiseks klõpsa Export:";
pub const FOOTNOTE: &str =
    "*Kasvuhoonegaaside heidet maakasutuse muutustest pole siin arvesse võetud.";

// ---------------------------------------------------------------------------
// Index page
// ---------------------------------------------------------------------------

/// Render the single dashboard page.
///
/// The page is self-contained: controls and output regions plus a small
/// script that refetches `/api/chart` and `/api/table` whenever the
/// dropdown or a slider handle changes. The chart itself is drawn
/// client-side from the figure JSON.
pub fn render_index(bounds: YearRange) -> String {
    let mode_options: String = ChartMode::ALL
        .iter()
        .map(|mode| {
            let selected = if *mode == ChartMode::default() {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                mode.as_str(),
                selected,
                mode.label()
            )
        })
        .collect();

    PAGE_TEMPLATE
        .replace("__TITLE__", TITLE)
        .replace("__SUBTITLE__", SUBTITLE)
        .replace("__DROPDOWN_CAPTION__", DROPDOWN_CAPTION)
        .replace("__SLIDER_CAPTION__", SLIDER_CAPTION)
        .replace("__TABLE_CAPTION__", TABLE_CAPTION)
        .replace("__FOOTNOTE__", FOOTNOTE)
        .replace("__MODE_OPTIONS__", &mode_options)
        .replace("__MIN_YEAR__", &bounds.from.to_string())
        .replace("__MAX_YEAR__", &bounds.to.to_string())
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="et">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
  body { font-family: "Helvetica Neue", Arial, sans-serif; margin: 0 auto; max-width: 1100px; padding: 0 1rem; color: #212529; }
  header { text-align: center; margin: 1.5rem 0; }
  header p { color: #6c757d; }
  .controls { display: flex; gap: 2rem; align-items: flex-end; margin-bottom: 1rem; }
  .control-mode { flex: 1; }
  .control-range { flex: 3; }
  select { width: 100%; padding: 0.3rem; }
  .range-pair input { width: 48%; }
  output { color: #6c757d; font-size: 0.9rem; }
  #graph { width: 100%; min-height: 450px; }
  table { border-collapse: collapse; width: 100%; margin: 0.5rem 0 1rem; font-size: 0.9rem; }
  th, td { border: 1px solid #dee2e6; padding: 0.25rem 0.5rem; text-align: right; }
  th { background: #f8f9fa; }
  footer { color: #6c757d; font-size: 0.85rem; margin: 1rem 0; }
</style>
</head>
<body>
<header>
  <h1>__TITLE__</h1>
  <p>__SUBTITLE__</p>
</header>

<section class="controls">
  <div class="control-mode">
    <label for="mode"><strong>__DROPDOWN_CAPTION__</strong></label>
    <select id="mode">__MODE_OPTIONS__</select>
  </div>
  <div class="control-range">
    <label><strong>__SLIDER_CAPTION__</strong></label>
    <div class="range-pair">
      <input type="range" id="from" min="__MIN_YEAR__" max="__MAX_YEAR__" step="1" value="__MIN_YEAR__">
      <input type="range" id="to" min="__MIN_YEAR__" max="__MAX_YEAR__" step="1" value="__MAX_YEAR__">
    </div>
    <output id="range-label"></output>
  </div>
</section>

<div id="graph"></div>

<section>
  <p><strong>__TABLE_CAPTION__</strong></p>
  <button id="export">Export</button>
  <table id="datatable"><thead></thead><tbody></tbody></table>
</section>

<footer><em>__FOOTNOTE__</em></footer>

<script>
const modeEl = document.getElementById('mode');
const fromEl = document.getElementById('from');
const toEl = document.getElementById('to');
const rangeLabel = document.getElementById('range-label');

function currentRange() {
  return { from: Number(fromEl.value), to: Number(toEl.value) };
}

// Handles may not cross: the moved handle stops at the other one.
function uncross(moved) {
  const { from, to } = currentRange();
  if (from > to) {
    if (moved === fromEl) fromEl.value = to; else toEl.value = from;
  }
}

function renderTable(data) {
  const head = document.querySelector('#datatable thead');
  const body = document.querySelector('#datatable tbody');
  head.innerHTML = '';
  body.innerHTML = '';

  const headerRow = document.createElement('tr');
  for (const col of data.columns) {
    const th = document.createElement('th');
    th.textContent = col.name;
    headerRow.appendChild(th);
  }
  head.appendChild(headerRow);

  for (const row of data.rows) {
    const tr = document.createElement('tr');
    for (const col of data.columns) {
      const td = document.createElement('td');
      const value = row[col.id];
      td.textContent = Number.isInteger(value) ? value : value.toFixed(2);
      tr.appendChild(td);
    }
    body.appendChild(tr);
  }
}

async function refresh() {
  const { from, to } = currentRange();
  rangeLabel.textContent = from + ' .. ' + to;

  const chartResp = await fetch('/api/chart?mode=' + modeEl.value + '&from=' + from + '&to=' + to);
  if (chartResp.ok) {
    const fig = await chartResp.json();
    Plotly.react('graph', fig.data, fig.layout, fig.config);
  }

  const tableResp = await fetch('/api/table?from=' + from + '&to=' + to);
  if (tableResp.ok) {
    renderTable(await tableResp.json());
  }
}

document.getElementById('export').addEventListener('click', () => {
  const { from, to } = currentRange();
  window.location = '/export?from=' + from + '&to=' + to;
});

for (const el of [modeEl, fromEl, toEl]) {
  el.addEventListener('input', (event) => { uncross(event.target); refresh(); });
}

refresh();
</script>
</body>
</html>
"#;
