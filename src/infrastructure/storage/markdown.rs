use crate::domain::entities::extraction::ExtractionOutcome;
use crate::domain::entities::similarity_result::QueryResult;
use std::fmt::Write;

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Keeps a passage on one table row.
fn escape_cell(text: &str) -> String {
    single_line(&text.replace('|', "\\|"))
}

pub fn render_query_result(result: &QueryResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Query: {}", single_line(&result.query));
    out.push('\n');
    out.push_str("## Similarity results\n\n");
    out.push_str("| Rank | Score | Passage |\n");
    out.push_str("|------|-------|---------|\n");
    for r in &result.results {
        let _ = writeln!(out, "| {} | {:.4} | {} |", r.rank, r.score, escape_cell(&r.text));
    }
    out
}

pub fn render_extraction(outcome: &ExtractionOutcome, timestamp: &str, pretty_json: &str) -> String {
    format!(
        "# Document extraction result\n\n\
         ## Input\n\
         - **Image**: {}\n\
         - **Mode**: {}\n\
         - **Extracted at**: {}\n\n\
         ## Extracted data\n\n\
         ```json\n{}\n```\n",
        outcome.source, outcome.mode, timestamp, pretty_json
    )
}
