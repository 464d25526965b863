use std::fmt::Write;

use crate::types::NormalizationReport;

pub fn print_statistics(report: &NormalizationReport) {
    print!("{}", format_statistics(report));
}

#[must_use]
pub fn format_statistics(report: &NormalizationReport) -> String {
    let mut out = String::new();

    push_field(&mut out, "Dimensions", &report.dimensions);
    for (channel, range) in report.ranges.iter() {
        let span = range.span().unwrap_or_default();
        push_field(&mut out, &format!("{channel} range"), &format!("{range} (span {span})"));
    }
    push_field(&mut out, "Shared domain", &report.domain);

    out
}

fn push_field(out: &mut String, name: &str, value: &dyn std::fmt::Display) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{name:20}: {value}");
}
