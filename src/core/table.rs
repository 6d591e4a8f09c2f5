//! Table rendering
//!
//! The report is a fixed-width table:
//!
//! ```text
//!                     Day:     1          2
//!               Best time:  1:30/ 6:40  0:15/
//!                         ----------- -----------
//! 1)  6 Ada               1****/1****      /
//! 2)  5 Bob           [12]2+45s/      1****/
//! 3)  1 (anonymous #9)    3    /           /
//! ```
//!
//! Column widths are global maxima, so they are measured over every member
//! and slot before the first line is written.

use std::io::{self, Write};

use tracing::debug;

use super::constants::{HIGHLIGHT_GAP_MAX_SECS, HIGHLIGHT_PLACE_MAX};
use super::format::{compute_gap, day_start, format_best_time, format_gap};
use super::names::display_name;
use super::pipeline::{Report, ReportOptions};
use super::style::Style;
use super::types::{Level, Member, Slot};

// =============================================================================
// COLUMN WIDTHS
// =============================================================================

/// Widths of the variable columns, in characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Ranking position, also used for per-slot places
    pub rank: usize,
    pub name: usize,
    /// Local and global scores
    pub score: usize,
    pub gap: usize,
}

impl ColumnWidths {
    /// Measure every value the table will print.
    pub fn measure(report: &Report) -> Self {
        let mut widths = Self {
            // No members, no positions to print
            rank: match report.members.len() {
                0 => 0,
                n => digits(n as u64),
            },
            ..Self::default()
        };
        for member in report.members.values() {
            let name = display_name(member.name.as_deref(), member.id);
            widths.name = widths.name.max(name.chars().count());
            widths.score = widths
                .score
                .max(digits(member.local_score as u64))
                .max(digits(member.global_score as u64));

            for day in report.days.days() {
                for level in Level::ALL {
                    let slot = Slot::new(day, level);
                    let Some(completion) = member.completion(slot) else {
                        continue;
                    };
                    let token = format_gap(compute_gap(completion.star_ts, slot, &report.best), 0);
                    widths.gap = widths.gap.max(token.chars().count());
                }
            }
        }
        widths
    }

    /// Width of the leading columns: `rank) score name [global]`
    pub fn lead(&self) -> usize {
        self.rank + self.score + self.name + self.score + 5
    }

    /// Width of one slot cell: place followed by gap
    pub fn cell(&self) -> usize {
        self.rank + self.gap
    }
}

fn digits(n: u64) -> usize {
    n.to_string().len()
}

// =============================================================================
// RENDERING
// =============================================================================

/// Write the whole table to `out`.
pub fn render<W: Write>(report: &Report, options: &ReportOptions, out: &mut W) -> io::Result<()> {
    let widths = ColumnWidths::measure(report);
    debug!(?widths, "[table] Measured columns");

    writeln!(out, "{}", title_line(report, &widths))?;
    writeln!(out, "{}", best_time_line(report, options, &widths))?;
    writeln!(out, "{}", separator_line(report, &widths))?;

    let mut standings: Vec<&Member> = report.members.values().collect();
    // Stable: equal scores keep registry order
    standings.sort_by(|a, b| b.local_score.cmp(&a.local_score));

    for (index, member) in standings.into_iter().enumerate() {
        writeln!(out, "{}", member_line(index + 1, member, report, options, &widths))?;
    }
    Ok(())
}

/// Render the table into a string.
pub fn render_to_string(report: &Report, options: &ReportOptions) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail
    let _ = render(report, options, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn title_line(report: &Report, widths: &ColumnWidths) -> String {
    let cell = widths.cell();
    let mut line = format!("{:>w$}", "Day:", w = widths.lead());
    for day in report.days.days() {
        line.push_str(&" ".repeat(cell));
        line.push_str(&format!("{:<w$}", day, w = 2 + cell));
    }
    line
}

fn best_time_line(report: &Report, options: &ReportOptions, widths: &ColumnWidths) -> String {
    let cell = widths.cell();
    let mut line = format!("{:>w$}", "Best time:", w = widths.lead());
    for day in report.days.days() {
        let start = day_start(options.year, day, options.utc_offset_hours);
        for level in Level::ALL {
            if level == Level::Two {
                line.push('/');
            }
            match (report.best.get(&Slot::new(day, level)), start) {
                (Some(&best_ts), Some(start)) => {
                    line.push_str(&format!("{:>cell$}", format_best_time(best_ts, start)));
                }
                _ => line.push_str(&" ".repeat(cell)),
            }
        }
        line.push(' ');
    }
    line
}

fn separator_line(report: &Report, widths: &ColumnWidths) -> String {
    let mut line = " ".repeat(widths.lead());
    for _ in report.days.days() {
        line.push_str(&"-".repeat(1 + 2 * widths.cell()));
        line.push(' ');
    }
    line
}

fn member_line(
    position: usize,
    member: &Member,
    report: &Report,
    options: &ReportOptions,
    widths: &ColumnWidths,
) -> String {
    let name = display_name(member.name.as_deref(), member.id);
    let mut line = format!(
        "{:>rank$}){:>score_col$} {:<name_w$}",
        position,
        member.local_score,
        name,
        rank = widths.rank,
        score_col = widths.score + 1,
        name_w = widths.name,
    );
    if member.global_score == 0 {
        line.push_str(&" ".repeat(widths.score + 2));
    } else {
        line.push_str(&format!("[{:>w$}]", member.global_score, w = widths.score));
    }

    for day in report.days.days() {
        for level in Level::ALL {
            if level == Level::Two {
                line.push('/');
            }
            line.push_str(&slot_cell(member, Slot::new(day, level), report, options, widths));
        }
        line.push(' ');
    }
    line
}

fn slot_cell(
    member: &Member,
    slot: Slot,
    report: &Report,
    options: &ReportOptions,
    widths: &ColumnWidths,
) -> String {
    let Some(completion) = member.completion(slot) else {
        return " ".repeat(widths.cell());
    };

    let place_text = completion
        .place
        .map(|p| p.to_string())
        .unwrap_or_default();
    let place_style = match completion.place {
        Some(place) if place <= HIGHLIGHT_PLACE_MAX => Style::Bold,
        _ => Style::Normal,
    };

    let gap = compute_gap(completion.star_ts, slot, &report.best);
    let gap_style = match gap {
        Some(secs) if secs <= HIGHLIGHT_GAP_MAX_SECS => Style::BoldCyan,
        Some(_) => Style::DimGray,
        None => Style::Normal,
    };
    let gap_text = format_gap(gap, widths.gap);

    format!(
        "{}{}",
        place_style.paint(&format!("{:>w$}", place_text, w = widths.rank), options.color),
        gap_style.paint(&format!("{:>w$}", gap_text, w = widths.gap), options.color),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::days::DayRange;
    use crate::core::pipeline::build_report;
    use crate::core::style::strip_sgr;
    use crate::core::types::{Completion, Snapshot};

    /// 2024-12-01 00:00 at UTC-5
    const DAY1: i64 = 1_733_029_200;
    const DAY2: i64 = DAY1 + 86_400;

    fn member(
        id: u64,
        name: Option<&str>,
        global_score: u32,
        solved: &[(u32, Level, i64)],
    ) -> Member {
        Member {
            id,
            name: name.map(str::to_string),
            local_score: 0,
            global_score,
            stars: solved.len() as u32,
            last_star_ts: 0,
            completions: solved
                .iter()
                .map(|&(day, level, ts)| (Slot::new(day, level), Completion::new(ts, 0)))
                .collect(),
        }
    }

    fn sample_report(days: DayRange) -> Report {
        let snapshot = Snapshot {
            members: [
                member(
                    1,
                    Some("Ada"),
                    0,
                    &[(1, Level::One, DAY1 + 90), (1, Level::Two, DAY1 + 400)],
                ),
                member(
                    2,
                    Some("\u{1F171}ob \u{2606}"),
                    12,
                    &[(1, Level::One, DAY1 + 135), (2, Level::One, DAY2 + 15)],
                ),
                member(9, None, 0, &[(1, Level::One, DAY1 + 90 + 3 * 3600)]),
            ]
            .into_iter()
            .map(|m| (m.id, m))
            .collect(),
            owner_id: 1,
            event: "2024".to_string(),
            day1_ts: Some(DAY1),
        };
        build_report([snapshot], days)
    }

    fn options(days: DayRange, color: bool) -> ReportOptions {
        ReportOptions {
            color,
            days,
            ..ReportOptions::new(2024)
        }
    }

    #[test]
    fn test_measure_widths() {
        let days = DayRange::new(1, 2).unwrap();
        let report = sample_report(days);
        let widths = ColumnWidths::measure(&report);

        assert_eq!(widths.rank, 1);
        assert_eq!(widths.name, "(anonymous #9)".len());
        // Scores 6, 5, 1 and global 12
        assert_eq!(widths.score, 2);
        assert_eq!(widths.gap, 4);
        assert_eq!(widths.cell(), 5);
        assert_eq!(widths.lead(), 1 + 2 + 14 + 2 + 5);
    }

    #[test]
    fn test_measure_without_gaps() {
        // Only best-time holders: no gap token is ever printed
        let days = DayRange::new(2, 2).unwrap();
        let report = sample_report(days);
        let widths = ColumnWidths::measure(&report);
        assert_eq!(widths.gap, 0);
    }

    #[test]
    fn test_render_plain_layout() {
        let days = DayRange::new(1, 2).unwrap();
        let report = sample_report(days);
        let text = render_to_string(&report, &options(days, false));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3 + 3);
        assert_eq!(
            lines[0],
            format!("{:>24}{}{:<7}{}{:<7}", "Day:", "     ", 1, "     ", 2)
        );
        assert_eq!(
            lines[1],
            format!("{:>24}{:>5}/{:>5} {:>5}/{:>5} ", "Best time:", "1:30", "6:40", "0:15", "")
        );
        assert_eq!(lines[2], format!("{}----------- ----------- ", " ".repeat(24)));

        // Ada: 3 + 3 = 6, Bob: 2 + 3 = 5, anonymous: 1
        assert_eq!(lines[3], "1)  6 Ada               1****/1****      /      ");
        assert_eq!(lines[4], "2)  5 Bob           [12]2+45s/      1****/      ");
        assert_eq!(lines[5], "3)  1 (anonymous #9)    3    /           /      ");
    }

    #[test]
    fn test_render_colored_strips_to_plain() {
        let days = DayRange::new(1, 2).unwrap();
        let report = sample_report(days);
        let plain = render_to_string(&report, &options(days, false));
        let colored = render_to_string(&report, &options(days, true));

        assert_ne!(plain, colored);
        assert!(colored.contains("\x1b[1m1\x1b[0m"));
        assert!(colored.contains("\x1b[1;36m+45s\x1b[0m"));
        assert_eq!(strip_sgr(&colored), plain);
    }

    #[test]
    fn test_render_empty_report() {
        let days = DayRange::new(1, 1).unwrap();
        let report = build_report(Vec::new(), days);
        assert_eq!(ColumnWidths::measure(&report), ColumnWidths::default());

        let text = render_to_string(&report, &options(days, true));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![" Day:1 ", "Best time:/ ", "     - "]);
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_render_highlight_thresholds() {
        // Twelve finishers of day 1 level 1; member k finishes k-th
        let gaps = [0, 1, 2, 3, 4, 5, 6, 7, 8, 60, 61, 200];
        let snapshot = Snapshot {
            members: gaps
                .iter()
                .zip(1u64..)
                .map(|(&gap, id)| {
                    let name = format!("m{id}");
                    (id, member(id, Some(name.as_str()), 0, &[(1, Level::One, DAY1 + 100 + gap)]))
                })
                .collect(),
            owner_id: 1,
            event: "2024".to_string(),
            day1_ts: Some(DAY1),
        };
        let days = DayRange::new(1, 1).unwrap();
        let report = build_report([snapshot], days);
        let colored = render_to_string(&report, &options(days, true));
        let lines: Vec<&str> = colored.lines().collect();
        assert_eq!(lines.len(), 3 + 12);

        // Place 10, 60s behind: bold place, bold cyan gap
        let tenth = lines[3 + 9];
        assert!(tenth.contains("\x1b[1m10\x1b[0m\x1b[1;36m+60s\x1b[0m"));

        // Place 11, 61s behind: plain place, dim gray gap
        let eleventh = lines[3 + 10];
        assert!(eleventh.contains("11\x1b[2;90m+01m\x1b[0m"));
        assert!(!eleventh.contains("\x1b[1m11"));

        let twelfth = lines[3 + 11];
        assert!(twelfth.contains("12\x1b[2;90m+03m\x1b[0m"));

        assert_eq!(strip_sgr(&colored), render_to_string(&report, &options(days, false)));
    }

    #[test]
    fn test_render_uses_report_days() {
        let report = sample_report(DayRange::new(1, 1).unwrap());
        // Options asking for more days than were computed do not widen the table
        let text = render_to_string(&report, &options(DayRange::new(1, 2).unwrap(), false));
        let lines: Vec<&str> = text.lines().collect();

        assert!(!lines[0].contains('2'));
        assert_eq!(lines[3], "1)  6 Ada               1****/1**** ");
        assert_eq!(lines[4], "2)  2 Bob           [12]2+45s/      ");
    }
}
