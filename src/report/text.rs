use crate::listing::ListingSummary;
use crate::report::ScoringSummary;

pub fn listing_to_text(summary: &ListingSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total companies: {}\n", summary.total));
    for stage in &summary.stages {
        output.push_str(&format!("{}: {}\n", stage.label, stage.count));
    }
    output.push_str(&format!("\n{}:\n", summary.heading));
    for (index, name) in summary.listed.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, name));
    }
    output
}

pub fn scoring_to_text(summary: &ScoringSummary) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Scoring completed! File saved as {}\n",
        summary.output
    ));
    output.push_str(&format!(
        "Scored {} companies from {} (mean score {:.2})\n",
        summary.rows, summary.input, summary.mean_score
    ));
    if !summary.top.is_empty() {
        output.push_str("\nTop companies:\n");
        for entry in &summary.top {
            output.push_str(&format!("{}. {} ({:.2})\n", entry.rank, entry.name, entry.score));
        }
    }
    output
}
