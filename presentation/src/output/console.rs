//! Console output formatter for search results

use colored::Colorize;
use fairfinder_domain::{
    Catalog, Exhibition, GroupCount, SearchFilter, group_by_invitation_type, group_by_province,
};

/// Width of the longest bar in the province chart
const BAR_WIDTH: usize = 30;

/// Formats search results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One card per exhibition
    pub fn format_cards(results: &[Exhibition]) -> String {
        if results.is_empty() {
            return Self::empty_state(
                "No Exhibitions Found",
                "Try adjusting your search filters to find more results.",
            );
        }

        let mut output = String::new();
        for exhibition in results {
            output.push_str(&Self::card(exhibition));
            output.push('\n');
        }
        output
    }

    fn card(exhibition: &Exhibition) -> String {
        let mut output = String::new();

        let badge = format!("[{}]", exhibition.invitation_type);
        let badge = if exhibition.invitation_type.is_free() {
            badge.green().bold()
        } else {
            badge.yellow().bold()
        };

        output.push_str(&format!(
            "{} {}\n",
            format!("── {} ──", exhibition.name).cyan().bold(),
            badge
        ));
        output.push_str(&format!("   {}\n", exhibition.category.dimmed()));

        output.push_str(&format!(
            "   {} {} to {} ({} days)\n",
            "Dates:    ".bold(),
            exhibition.start_date,
            exhibition.end_date,
            exhibition.duration_days()
        ));
        output.push_str(&format!(
            "   {} {}, {}\n",
            "Venue:    ".bold(),
            exhibition.venue,
            exhibition.city
        ));
        output.push_str(&format!(
            "   {} {}\n",
            "Organizer:".bold(),
            exhibition.organizer
        ));
        output.push_str(&format!(
            "   {} Verified  {} Consular OK\n",
            Self::status_mark(exhibition.verification_status),
            Self::status_mark(exhibition.consular_acceptance)
        ));
        output.push_str(&format!(
            "   {} {}\n",
            "Website:  ".bold(),
            exhibition.website.as_str().blue()
        ));
        output.push_str(&format!(
            "   {} {}\n",
            "Apply:    ".bold(),
            exhibition.application_link.as_str().blue()
        ));

        output
    }

    fn status_mark(ok: bool) -> String {
        if ok {
            "[v]".green().to_string()
        } else {
            "[x]".red().to_string()
        }
    }

    /// Province bar chart and invitation-type breakdown
    pub fn format_charts(results: &[Exhibition]) -> String {
        if results.is_empty() {
            return Self::empty_state(
                "Not Enough Data",
                "Perform a search to see data visualizations.",
            );
        }

        let mut output = String::new();

        output.push_str(&Self::section_header("Exhibitions by Province"));
        output.push_str(&Self::bar_chart(&group_by_province(results)));

        output.push_str(&Self::section_header("Invitation Types"));
        output.push_str(&Self::breakdown(
            &group_by_invitation_type(results),
            results.len(),
        ));

        output
    }

    fn bar_chart(groups: &[GroupCount]) -> String {
        let max = groups.iter().map(|g| g.count).max().unwrap_or(0);
        let label_width = groups.iter().map(|g| g.label.chars().count()).max().unwrap_or(0);

        groups
            .iter()
            .map(|g| {
                let len = if max == 0 {
                    0
                } else {
                    (g.count * BAR_WIDTH).div_ceil(max)
                };
                format!(
                    "  {:<width$} {} {}\n",
                    g.label,
                    "█".repeat(len).blue(),
                    g.count,
                    width = label_width
                )
            })
            .collect()
    }

    fn breakdown(groups: &[GroupCount], total: usize) -> String {
        let label_width = groups.iter().map(|g| g.label.chars().count()).max().unwrap_or(0);

        groups
            .iter()
            .map(|g| {
                format!(
                    "  {:<width$} {}\n",
                    g.label.bold(),
                    Self::share_label(g, total),
                    width = label_width
                )
            })
            .collect()
    }

    /// `"<n> Events (Rate <p>%)"`, two decimals
    fn share_label(group: &GroupCount, total: usize) -> String {
        format!(
            "{} Events (Rate {:.2}%)",
            group.count,
            group.share(total) * 100.0
        )
    }

    /// Format as JSON
    pub fn format_json(results: &[Exhibition]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn format_welcome() -> String {
        Self::empty_state(
            "Find Your Next Trade Fair",
            "Use the filters to start your search for exhibition invitations in China.",
        )
    }

    pub fn format_error(message: &str) -> String {
        format!("{}\n{}\n", "Error".red().bold(), message.red())
    }

    /// One-line description of what was searched and how many came back
    pub fn format_summary(filter: &SearchFilter, count: usize) -> String {
        format!(
            "{} {} exhibitions  {}\n",
            "Found".green().bold(),
            count,
            filter.to_string().dimmed()
        )
    }

    /// Accepted values for one filter field, wildcard first
    pub fn format_catalog(catalog: &Catalog) -> String {
        let mut output = format!("{}\n", Self::capitalize(catalog.field()).cyan().bold());
        output.push_str("  Any\n");
        for entry in catalog.entries() {
            output.push_str(&format!("  {}\n", entry));
        }
        output
    }

    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn empty_state(title: &str, hint: &str) -> String {
        format!("\n{}\n{}\n", title.bold(), hint.dimmed())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
