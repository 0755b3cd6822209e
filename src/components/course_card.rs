//! Card component for catalog grid entries.

use leptos::prelude::*;

use crate::net::types::CourseSummary;
use crate::util::format::format_price_cents;

/// A clickable card representing one course in the catalog grid.
#[component]
pub fn CourseCard(summary: CourseSummary) -> impl IntoView {
    let href = format!("/course/{}", summary.id);
    let price = format_price_cents(summary.price_cents);
    let rating = summary
        .average_rating
        .map(|value| format!("{value:.1} ★"));

    view! {
        <a class="course-card" href=href>
            {summary
                .cover_url
                .map(|url| view! { <img class="course-card__cover" src=url alt=""/> })}
            <span class="course-card__category">{summary.category_name}</span>
            <span class="course-card__title">{summary.title}</span>
            {summary
                .subtitle
                .map(|subtitle| view! { <span class="course-card__subtitle">{subtitle}</span> })}
            <span class="course-card__meta">
                <span class="course-card__price">{price}</span>
                {rating.map(|r| view! { <span class="course-card__rating">{r}</span> })}
            </span>
        </a>
    }
}
