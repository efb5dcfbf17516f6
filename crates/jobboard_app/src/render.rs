//! Plain-text rendering of the view model and job details.

use std::fmt::Write;

use jobboard_core::{AppViewModel, Catalog, StatusView};
use jobboard_engine::JobDetail;

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let category = view.category_label.as_deref().unwrap_or("Job Title");
    let _ = writeln!(out, "== {} | {} ==", view.country_name, category);

    match &view.status {
        StatusView::Idle => {}
        StatusView::Loading => out.push_str("Loading jobs...\n"),
        StatusView::Message(message) => {
            let _ = writeln!(out, "{message}");
        }
        StatusView::Ready { total_count } => {
            let _ = writeln!(out, "{total_count} jobs");
            for job in &view.jobs {
                let _ = writeln!(out, "  [{}] {} - {}", job.id, job.title, job.location);
            }
        }
    }

    out.push_str(&render_pages(view));
    out
}

fn render_pages(view: &AppViewModel) -> String {
    let pages = view
        .page_window
        .iter()
        .map(|page| {
            if *page == view.page {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let prev = if view.has_previous { "<prev" } else { "     " };
    let next = if view.has_next { "next>" } else { "     " };
    let total = view
        .total_pages
        .map(|total| format!(" of {total}"))
        .unwrap_or_default();
    format!("{prev} {pages} {next}  (page {}{total})\n", view.page)
}

pub fn render_categories(catalog: &Catalog, filter: &str) -> String {
    if catalog.is_empty() {
        return "No categories available.\n".to_string();
    }
    let mut out = String::new();
    for category in catalog.matching(filter) {
        let _ = writeln!(out, "  {:<32} {}", category.label, category.tag);
    }
    if out.is_empty() {
        out.push_str("No matching categories.\n");
    }
    out
}

pub fn render_detail(detail: &JobDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", detail.title);
    if let Some(company) = &detail.company {
        let _ = writeln!(out, "Company:  {company}");
    }
    let _ = writeln!(out, "Location: {}", detail.location);
    if let (Some(min), Some(max)) = (detail.salary_min, detail.salary_max) {
        let _ = writeln!(out, "Salary:   {min:.0} - {max:.0}");
    }
    if let Some(contract) = &detail.contract_time {
        let _ = writeln!(out, "Contract: {contract}");
    }
    if let Some(posted) = detail.created.as_deref().and_then(posted_date) {
        let _ = writeln!(out, "Posted:   {posted}");
    }
    if !detail.description.is_empty() {
        let _ = writeln!(out, "\n{}\n", detail.description);
    }
    let _ = writeln!(out, "Apply: {}", detail.redirect_url);
    out
}

fn posted_date(created: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(created)
        .map(|at| at.date_naive().to_string())
        .ok()
}
