//! Stage instructions and expected-output examples
//!
//! Variables: `brand_name`, `competitor_names` and `competitor_tickers`
//! (both comma-separated).

use agent_prompt::{JinjaTemplate, Result};

/// Stage 1: one recent news item per brand
pub fn search_task() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.search",
        r"You are the Search Agent assigned to collect up-to-date online data about the brand **{{ brand_name }}** and its competitors: {{ competitor_names }}.

Use search engines and APIs to:
- Fetch 1 latest high-quality news or blog entries per brand.
- Prioritize reputable, timely, and relevant sources.
- Summarize each source clearly for use by downstream agents.",
    )
}

pub fn search_expected() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.search.expected",
        r#"[
  {
    "brand": "Nike",
    "title": "Nike launches eco-friendly shoes",
    "url": "https://...",
    "source": "CNN",
    "publishedAt": "2025-07-03",
    "summary": "Nike introduced a new line of sustainable footwear..."
  },
  ...
]"#,
    )
}

/// Stage 2: tone counts and a score per brand
pub fn sentiment_task() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.sentiment",
        r"You are the Sentiment Analyst Agent.

Your input is a collection of article summaries about brands. For each brand:
- Count articles with positive, neutral, and negative tone.
- Assign a sentiment score from -1 (negative) to +1 (positive).

Highlight subtle emotional cues and ignore sarcastic/misleading signals.",
    )
}

pub fn sentiment_expected() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.sentiment.expected",
        r#"[
  {
    "brand": "Nike",
    "positive": 6,
    "neutral": 2,
    "negative": 2,
    "avg_sentiment_score": 0.60
  },
  ...
]"#,
    )
}

/// Stage 3: price, trend and volatility per ticker
pub fn finance_task() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.finance",
        r"You are the Financial Analyst.

Analyze financial performance for **{{ brand_name }}** and its competitors ({{ competitor_tickers }}) using the stock financial data tool.

For each brand:
- Retrieve current price, 7-day trend (%), and volatility.
- Identify any investor-impacting news or anomalies.",
    )
}

pub fn finance_expected() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.finance.expected",
        r#"[
  {
    "ticker": "NKE",
    "company": "Nike",
    "current_price": 98.40,
    "change_7d": 1.25,
    "volatility": "Moderate"
  },
  ...
]"#,
    )
}

/// Stage 4: side-by-side ranking
pub fn comparison_task() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.comparison",
        r"You are the Competitive Intelligence Analyst.

Compare the overall brand performance of **{{ brand_name }}** with competitors: {{ competitor_names }}.

Use:
- Sentiment analysis results
- Search visibility / article count
- Financial change % over 7 days

Generate a side-by-side comparison and declare which brand leads overall and why.",
    )
}

pub fn comparison_expected() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.comparison.expected",
        r"| Brand   | Mentions | Sentiment Score | 7-Day Trend (%) | Verdict |
|---------|----------|-----------------|-----------------|---------|
| Nike    | 12       | 0.60            | +1.25%          | 🟢 Best performance |
| Adidas  | 8        | 0.45            | +0.75%          | 🟡 Moderate |
| Puma    | 4        | -0.10           | -0.80%          | 🔴 Weak |

Summary:
- Nike is ahead in sentiment, visibility, and financial strength.",
    )
}

/// Stage 5: the executive report
pub fn report_task() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.report",
        r"You are the Executive Reporting Specialist.

Consolidate outputs from all other agents and prepare a final report for **{{ brand_name }}**.

The report should:
- Summarize sentiment trends
- Highlight financial performance
- Compare with competitors
- Offer 2-3 strategic recommendations

Format should be business-friendly and visually clear.",
    )
}

pub fn report_expected() -> Result<JinjaTemplate> {
    JinjaTemplate::new(
        "brand.task.report.expected",
        r"Return the final output in **valid GitHub-flavored Markdown**, clearly divided into the following 5 sections. Use headings (##), bullet points, and a Markdown table where needed.

Example format:

# 📊 Brand Monitoring Report: {{ brand_name }}

## 1. Public Sentiment Overview
- Positive: ...
- Negative: ...
- Score: ...

## 2. Financial Summary
- Current price: ...
- Weekly change: ...

## 3. Competitor Comparison
- Table with scores and ranking

## 4. Key Insights
- Summary bullets

## 5. Recommendations
- Actionable next steps for brand team

Generate in proper markdown format",
    )
}
