//! Terminal output formatter

use super::RankReport;
use linkrank_core::RankTable;

pub fn format_report(report: &RankReport) -> String {
    let mut output = format!("PageRank Results from Sampling (n = {})\n", report.samples);
    push_ranks(&mut output, &report.sampled);
    output.push_str("PageRank Results from Iteration\n");
    push_ranks(&mut output, &report.iterated.ranks);
    output
}

fn push_ranks(output: &mut String, ranks: &RankTable) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}
