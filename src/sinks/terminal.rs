use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use super::format::{
    Sections, format_average, format_clock, format_seconds, is_server_error, write_line,
};
use crate::error::AppResult;
use crate::metrics::{RunReport, StatusReport};

#[derive(Debug, Clone, Copy)]
enum Tone {
    Bold,
    Accent,
    Success,
    Warning,
    Failure,
}

fn paint(text: &str, tone: Tone, use_color: bool) -> String {
    if !use_color {
        return text.to_owned();
    }
    match tone {
        Tone::Bold => text.bold().to_string(),
        Tone::Accent => text.with(Color::Cyan).to_string(),
        Tone::Success => text.with(Color::Green).to_string(),
        Tone::Warning => text.with(Color::Yellow).to_string(),
        Tone::Failure => text.with(Color::Red).to_string(),
    }
}

/// Renders the human-readable report.
///
/// # Errors
///
/// Returns an error if the output buffer cannot be written.
pub fn render_terminal(report: &RunReport, use_color: bool) -> AppResult<String> {
    let mut output = String::new();

    write_line(&mut output, &paint("📊 Stress Test Report", Tone::Bold, use_color))?;
    write_line(
        &mut output,
        &format!("ID:          {}", paint(&report.id, Tone::Accent, use_color)),
    )?;
    write_line(&mut output, &format!("URL:         {}", report.url))?;
    write_line(&mut output, &format!("Requests:    {}", report.requests))?;
    write_line(&mut output, &format!("Concurrency: {}", report.concurrency))?;
    write_line(
        &mut output,
        &format!("Start:       {}", format_clock(&report.timestamp_start)),
    )?;
    write_line(
        &mut output,
        &format!("End:         {}", format_clock(&report.timestamp_end)),
    )?;
    write_line(
        &mut output,
        &format!("Duration:    {} seconds", format_seconds(report)),
    )?;

    let sections = Sections::split(report);

    if let Some(total) = sections.total {
        write_line(&mut output, "")?;
        write_line(&mut output, &paint("📌 Total Summary:", Tone::Bold, use_color))?;
        write_status_line(&mut output, total, Tone::Bold, use_color)?;
    }

    write_line(&mut output, "")?;
    if let Some(ok) = sections.ok {
        write_line(&mut output, &paint("✅ Status 200", Tone::Bold, use_color))?;
        write_status_line(&mut output, ok, Tone::Success, use_color)?;
    } else {
        write_line(
            &mut output,
            &paint("⚠️ No request returned status 200", Tone::Bold, use_color),
        )?;
    }

    if !sections.others.is_empty() {
        write_line(&mut output, "")?;
        write_line(&mut output, &paint("📦 Other Status", Tone::Bold, use_color))?;
        for bucket in sections.others {
            let tone = if is_server_error(bucket) {
                Tone::Failure
            } else {
                Tone::Warning
            };
            write_status_line(&mut output, bucket, tone, use_color)?;
        }
    }

    Ok(output)
}

fn write_status_line(
    output: &mut String,
    bucket: &StatusReport,
    tone: Tone,
    use_color: bool,
) -> AppResult<()> {
    write_line(
        output,
        &format!(
            "{} | Count: {} | Min: {}ms | Max: {}ms | Total: {}ms | Avg: {}ms",
            paint(&format!("→ Status {}", bucket.status), tone, use_color),
            paint(&bucket.count.to_string(), tone, use_color),
            bucket.min_ms,
            bucket.max_ms,
            bucket.total_ms,
            format_average(bucket)
        ),
    )
}

/// Prints the report to stdout, colored when stdout is a terminal.
///
/// # Errors
///
/// Returns an error if the report cannot be rendered.
pub fn print_report(report: &RunReport, no_color: bool) -> AppResult<()> {
    let use_color = !no_color && std::io::stdout().is_terminal();
    let rendered = render_terminal(report, use_color)?;
    print!("{}", rendered);
    Ok(())
}
