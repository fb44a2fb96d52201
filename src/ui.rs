use crate::selection::Selection;

pub fn render_index(selection: &Selection) -> String {
    INDEX_HTML
        .replace("{{STYLE}}", SHARED_STYLE)
        .replace("{{CHART_JS}}", CHART_JS)
        .replace("{{GRANULARITY}}", selection.granularity().label())
        .replace("{{PERIOD}}", &selection.period_label())
        .replace("{{YEAR}}", &selection.year().to_string())
}

pub fn render_summary() -> String {
    SUMMARY_HTML.replace("{{CHART_JS}}", CHART_JS)
}

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

const SHARED_STYLE: &str = r#"
    :root {
      --bg: #f4f5fb;
      --ink: #1f2333;
      --muted: #6b7080;
      --card: #ffffff;
      --border: rgba(31, 35, 51, 0.08);
      --up: #1f9d55;
      --down: #d64545;
      --shadow: 0 18px 40px rgba(31, 35, 51, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 28px 18px 48px;
    }

    .app {
      width: min(1180px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3vw, 2.1rem);
    }

    header a {
      color: var(--muted);
      font-size: 0.95rem;
    }

    .selectors {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 18px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 6px;
    }

    .card .label {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .card .value {
      font-size: 1.5rem;
      font-weight: 700;
    }

    .card .description {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .trend.up {
      color: var(--up);
    }

    .trend.down {
      color: var(--down);
    }

    .panel {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 18px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 12px;
    }

    .panel-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .panel-header h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .panel-header p {
      margin: 4px 0 0;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .chart-box {
      position: relative;
      height: 300px;
    }

    .grid-2 {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
      gap: 16px;
    }

    select {
      appearance: none;
      border: 1px solid var(--border);
      border-radius: 10px;
      padding: 8px 14px;
      font-size: 0.95rem;
      background: var(--card);
      min-width: 140px;
      cursor: pointer;
    }

    .status {
      font-size: 0.9rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--down);
    }

    @media (max-width: 600px) {
      .grid-2 {
        grid-template-columns: 1fr;
      }
      select {
        width: 100%;
      }
    }
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Analytics Dashboard</title>
  <style>{{STYLE}}</style>
  <script src="{{CHART_JS}}"></script>
</head>
<body>
  <main class="app">
    <header>
      <h1>Analytics Dashboard</h1>
      <a href="/summary">July to December summary</a>
    </header>

    <section class="selectors">
      <select id="granularity" aria-label="Time period">
        <option>Monthly</option>
        <option>Quarterly</option>
        <option>Annually</option>
      </select>
      <select id="period" aria-label="Period"></select>
      <select id="year" aria-label="Year"></select>
    </section>

    <section class="cards" id="cards"></section>

    <section class="panel" data-panel="revenue">
      <div class="panel-header">
        <div>
          <h2>Revenue Trends</h2>
          <p>Revenue comparison between Xero and PayPal</p>
        </div>
        <select class="chart-type" data-chart="revenue_chart" aria-label="Revenue chart type">
          <option value="line">Line Chart</option>
          <option value="bar">Bar Chart</option>
          <option value="horizontalBar">Horizontal Bar</option>
          <option value="pie">Pie Chart</option>
        </select>
      </div>
      <div class="chart-box"><canvas id="revenue-chart"></canvas></div>
    </section>

    <section class="grid-2">
      <div class="panel" data-panel="expense">
        <div class="panel-header">
          <div>
            <h2>Expense Breakdown</h2>
            <p>Distribution of expenses by category</p>
          </div>
          <select class="chart-type" data-chart="expense_chart" aria-label="Expense chart type">
            <option value="doughnut">Doughnut</option>
            <option value="pie">Pie Chart</option>
            <option value="bar">Bar Chart</option>
            <option value="horizontalBar">Horizontal Bar</option>
            <option value="line">Line Chart</option>
          </select>
        </div>
        <div class="chart-box"><canvas id="expense-chart"></canvas></div>
      </div>
      <div class="panel" data-panel="cashflow">
        <div class="panel-header">
          <div>
            <h2>Cash Flow Analysis</h2>
            <p>Income vs expenses comparison</p>
          </div>
          <select class="chart-type" data-chart="cashflow_chart" aria-label="Cash flow chart type">
            <option value="bar">Bar Chart</option>
            <option value="horizontalBar">Horizontal Bar</option>
            <option value="line">Line Chart</option>
            <option value="pie">Pie Chart</option>
          </select>
        </div>
        <div class="chart-box"><canvas id="cashflow-chart"></canvas></div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const state = {
      granularity: '{{GRANULARITY}}',
      period: '{{PERIOD}}',
      year: '{{YEAR}}',
      revenue_chart: 'line',
      expense_chart: 'doughnut',
      cashflow_chart: 'bar'
    };

    const granularityEl = document.getElementById('granularity');
    const periodEl = document.getElementById('period');
    const yearEl = document.getElementById('year');
    const cardsEl = document.getElementById('cards');
    const statusEl = document.getElementById('status');
    const charts = {};

    const currency = new Intl.NumberFormat('en-IN', {
      style: 'currency',
      currency: 'INR',
      minimumFractionDigits: 0
    });

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const fillSelect = (el, values, selected) => {
      el.innerHTML = values.map((value) => `<option>${value}</option>`).join('');
      el.value = String(selected);
    };

    const withCurrencyTicks = (config) => {
      const scales = config.options.scales;
      if (scales) {
        const valueAxis = config.options.indexAxis === 'y' ? scales.x : scales.y;
        valueAxis.ticks = { callback: (value) => currency.format(value) };
      }
      return config;
    };

    const draw = (name, config) => {
      if (charts[name]) {
        charts[name].destroy();
      }
      const ctx = document.getElementById(`${name}-chart`);
      charts[name] = new Chart(ctx, withCurrencyTicks(config));
    };

    const renderCards = (cards) => {
      cardsEl.innerHTML = cards
        .map((card) => {
          const direction = card.trend.is_positive ? 'up' : 'down';
          const arrow = card.trend.is_positive ? '&#8599;' : '&#8600;';
          return `
            <div class="card">
              <span class="label">${card.title}</span>
              <span class="value">${currency.format(card.amount)}</span>
              <span class="description">${card.description}
                <span class="trend ${direction}">${arrow} ${card.trend.value}%</span>
              </span>
            </div>`;
        })
        .join('');
    };

    const loadOptions = async () => {
      const res = await fetch(`/api/options?granularity=${state.granularity}`);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      const options = await res.json();
      fillSelect(periodEl, options.periods, state.period);
      fillSelect(yearEl, options.years, state.year);
      yearEl.hidden = !options.show_year;
      return options;
    };

    const fallbackNote = (dashboard) => {
      if (!dashboard.fallback) {
        return '';
      }
      const wanted = dashboard.selection.key;
      const notes = [];
      if (dashboard.series_key !== wanted) {
        notes.push(`charts from ${dashboard.series_key}`);
      }
      if (dashboard.stats_key !== wanted) {
        notes.push(`cards from ${dashboard.stats_key}`);
      }
      return `No data for ${wanted}: showing ${notes.join(', ')}`;
    };

    const loadDashboard = async () => {
      const params = new URLSearchParams(state);
      const res = await fetch(`/api/dashboard?${params}`);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      const dashboard = await res.json();
      renderCards(dashboard.cards);
      draw('revenue', dashboard.charts.revenue);
      draw('expense', dashboard.charts.expense);
      draw('cashflow', dashboard.charts.cashflow);
      setStatus(fallbackNote(dashboard), 'info');
    };

    granularityEl.addEventListener('change', async () => {
      state.granularity = granularityEl.value;
      try {
        const options = await loadOptions();
        state.period = options.defaults.period;
        state.year = String(options.defaults.year);
        periodEl.value = state.period;
        yearEl.value = state.year;
        await loadDashboard();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    periodEl.addEventListener('change', () => {
      state.period = periodEl.value;
      loadDashboard().catch((err) => setStatus(err.message, 'error'));
    });

    yearEl.addEventListener('change', () => {
      state.year = yearEl.value;
      loadDashboard().catch((err) => setStatus(err.message, 'error'));
    });

    document.querySelectorAll('.chart-type').forEach((el) => {
      el.addEventListener('change', () => {
        state[el.dataset.chart] = el.value;
        loadDashboard().catch((err) => setStatus(err.message, 'error'));
      });
    });

    granularityEl.value = state.granularity;
    loadOptions()
      .then(loadDashboard)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

const SUMMARY_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Financial Summary</title>
  <style>
    body {
      margin: 0;
      background: #f4f5fb;
      color: #1f2333;
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 28px 18px 48px;
    }
    .app {
      width: min(1080px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }
    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }
    .card, .panel {
      background: #ffffff;
      border: 1px solid rgba(31, 35, 51, 0.08);
      border-radius: 16px;
      padding: 18px;
    }
    .card .label {
      display: block;
      color: #6b7080;
      font-size: 0.85rem;
    }
    .card .value {
      font-size: 1.5rem;
      font-weight: 700;
    }
    .chart-box {
      position: relative;
      height: 320px;
    }
  </style>
  <script src="{{CHART_JS}}"></script>
</head>
<body>
  <main class="app">
    <header>
      <h1>Financial Summary</h1>
      <a href="/">Back to dashboard</a>
    </header>
    <section class="cards">
      <div class="card"><span class="label">Total Revenue</span><span class="value" id="totalRevenue">--</span></div>
      <div class="card"><span class="label">Total Expenses</span><span class="value" id="totalExpenses">--</span></div>
      <div class="card"><span class="label">Net Profit</span><span class="value" id="netProfit">--</span></div>
    </section>
    <section class="panel">
      <h2>Revenue vs Expenses</h2>
      <div class="chart-box"><canvas id="revenueExpenseChart"></canvas></div>
    </section>
    <section class="panel">
      <h2>Net Profit Trend</h2>
      <div class="chart-box"><canvas id="profitTrendChart"></canvas></div>
    </section>
  </main>

  <script>
    const currency = new Intl.NumberFormat('en-IN', {
      style: 'currency',
      currency: 'INR',
      minimumFractionDigits: 0
    });

    const withCurrency = (config) => {
      config.options.scales.y.ticks = { callback: (value) => currency.format(value) };
      config.options.plugins.tooltip.callbacks = {
        label: (context) => `${context.dataset.label}: ${currency.format(context.parsed.y)}`
      };
      return config;
    };

    fetch('/api/summary')
      .then((res) => res.json())
      .then((summary) => {
        document.getElementById('totalRevenue').textContent = currency.format(summary.financials.total_revenue);
        document.getElementById('totalExpenses').textContent = currency.format(summary.financials.total_expenses);
        document.getElementById('netProfit').textContent = currency.format(summary.financials.net_profit);
        new Chart(document.getElementById('revenueExpenseChart'), withCurrency(summary.charts.revenue_expense));
        new Chart(document.getElementById('profitTrendChart'), withCurrency(summary.charts.profit_trend));
      });
  </script>
</body>
</html>
"#;
