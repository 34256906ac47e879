//! CSV output formatter

use super::RankReport;

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("method,page,rank\n");

    for (page, rank) in report.sampled.iter() {
        output.push_str(&format!("sampling,{},{:.4}\n", escape_csv(page), rank));
    }
    for (page, rank) in report.iterated.ranks.iter() {
        output.push_str(&format!("iteration,{},{:.4}\n", escape_csv(page), rank));
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
