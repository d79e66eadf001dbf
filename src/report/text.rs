use crate::model::scores::category_order;
use crate::model::verdict::Verdict;
use crate::report::{SessionReport, format_f64_6};

pub fn render_report_text(report: &SessionReport) -> String {
    let mut out = String::new();

    out.push_str("Certification Score Report\n");
    out.push_str("==========================\n\n");

    out.push_str("1. Category scores\n");
    for &category in category_order() {
        out.push_str(&format!(
            "{}: {}\n",
            category.label(),
            format_f64_6(report.categories.get(category))
        ));
    }
    out.push('\n');

    out.push_str("2. Result\n");
    out.push_str(&format!(
        "Certification score: {}\n",
        format_f64_6(report.certification_score)
    ));
    out.push_str(&format!(
        "Passing score: {}\n",
        format_f64_6(report.passing_score)
    ));
    if let Some(verdict) = report.verdict {
        out.push_str(&format!("{}\n", verdict_statement(verdict)));
    }
    out.push('\n');

    out.push_str("3. Attempt history\n");
    if report.attempts.is_empty() {
        out.push_str("No attempts recorded.\n");
    }
    for row in &report.attempts {
        out.push_str(&format!(
            "Attempt {}: score {}, correct {}/{}, incorrect {}\n",
            row.id,
            format_f64_6(row.score),
            row.correct,
            report.questions,
            row.incorrect
        ));
    }

    out
}

fn verdict_statement(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Fail => {
            "Below the passing score. Review the study resources before the next attempt."
        }
        Verdict::Pass => "Good job! This score clears the passing threshold.",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
