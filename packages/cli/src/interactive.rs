//! Interactive menu, used when no subcommand is given.

use std::error::Error;

use dialoguer::{Input, Select};
use hospital_fragility_metrics_models::RiskLevel;
use hospital_fragility_query::{ListOptions, SortKey, SortOrder};

use crate::{Source, format};

enum Action {
    ListHospitals,
    Summary,
    Detail,
    Server,
}

impl Action {
    const ALL: &[Self] = &[Self::ListHospitals, Self::Summary, Self::Detail, Self::Server];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::ListHospitals => "List hospitals",
            Self::Summary => "Show summary",
            Self::Detail => "Show hospital detail",
            Self::Server => "Start server",
        }
    }
}

/// Sort choices offered by the menu, in display order.
const SORTS: &[(&str, Option<(SortKey, SortOrder)>)] = &[
    ("Dataset order", None),
    (
        "Most fragile first",
        Some((SortKey::FragilityScore, SortOrder::Desc)),
    ),
    ("Most beds first", Some((SortKey::TotalBeds, SortOrder::Desc))),
    (
        "Highest occupancy first",
        Some((SortKey::OccupancyRate, SortOrder::Desc)),
    ),
    ("Name", Some((SortKey::Name, SortOrder::Asc))),
];

/// Prompts for an action and runs it.
///
/// # Errors
///
/// Returns an error if a prompt fails, the dataset cannot be loaded, or
/// the server fails to start.
pub fn run(source: &Source) -> Result<(), Box<dyn Error>> {
    println!("Hospital Fragility");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Action::ALL[idx] {
        Action::ListHospitals => {
            let options = prompt_list_options()?;
            let index = source.load()?;
            println!("{}", format::render_table(&index.list(&options)));
        }
        Action::Summary => {
            let index = source.load()?;
            println!("{}", format::render_summary(index.summary()));
        }
        Action::Detail => {
            let index = source.load()?;
            let id: String = Input::new()
                .with_prompt("Hospital ID (e.g. wa-007)")
                .interact_text()?;
            println!("{}", format::render_detail(&index.get_detail(&id)?));
        }
        Action::Server => {
            actix_web::rt::System::new().block_on(hospital_fragility_server::interactive::run())?;
        }
    }

    Ok(())
}

fn prompt_list_options() -> Result<ListOptions, Box<dyn Error>> {
    let mut risk_labels = vec!["All".to_string()];
    risk_labels.extend(RiskLevel::all().iter().map(ToString::to_string));

    let risk_idx = Select::new()
        .with_prompt("Risk level")
        .items(&risk_labels)
        .default(0)
        .interact()?;

    let sort_labels: Vec<&str> = SORTS.iter().map(|(label, _)| *label).collect();
    let sort_idx = Select::new()
        .with_prompt("Sort by")
        .items(&sort_labels)
        .default(0)
        .interact()?;

    Ok(ListOptions {
        country_code: None,
        risk_level: risk_idx
            .checked_sub(1)
            .and_then(|i| RiskLevel::all().get(i).copied()),
        sort: SORTS[sort_idx].1,
    })
}
