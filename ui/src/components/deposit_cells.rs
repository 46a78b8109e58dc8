//! Table cells shared by the pending queue and the per-user history.

use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;
use chrono::Utc;
use dioxus::prelude::*;
use std::fmt::Display;

/// "May 1, 2024, 10:00:00 AM"
pub fn long_datetime<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}

/// "2024-05-01 10:00:00"
pub fn short_datetime<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum DateStyle {
    #[default]
    Long,
    Short,
}

/// A `<td>` with the timestamp in local time. Hovering shows it in UTC.
#[component]
pub fn DateCell(at: DateTime<Utc>, #[props(default)] format: DateStyle) -> Element {
    let local = at.with_timezone(&Local);
    let text = match format {
        DateStyle::Long => long_datetime(&local),
        DateStyle::Short => short_datetime(&local),
    };
    let utc = at.to_rfc3339();

    rsx! {
        td { title: "{utc}", "{text}" }
    }
}

/// A `<td>` linking to the uploaded payment proof in a new tab.
#[component]
pub fn ProofCell(proof: Option<String>) -> Element {
    rsx! {
        td {
            match proof {
                Some(url) => rsx! {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Proof"
                    }
                },
                None => rsx! {
                    small { "No proof" }
                },
            }
        }
    }
}
