//! Building command handlers.

use serde::Serialize;
use tabled::Tabled;

use facilities_core::{Address, Building, BuildingSummary, NodeId, Snapshot, split_address};

use crate::cli::{BuildingsArgs, BuildingsCommand};
use crate::error::CliError;
use crate::output::{self, OutputOpts};

use super::util;

// ── View model ──────────────────────────────────────────────────────

/// A building card: identity, split address, and counts.
#[derive(Debug, Serialize)]
struct BuildingCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<NodeId>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
    #[serde(flatten)]
    summary: BuildingSummary,
}

impl BuildingCard {
    fn of(building: &Building, snapshot: &Snapshot) -> Self {
        Self {
            id: building.id.clone(),
            name: building.display_name().to_owned(),
            address: building.address.as_deref().map(split_address),
            summary: snapshot.summary(building),
        }
    }

    fn id_text(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BuildingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "No.")]
    number: String,
    #[tabled(rename = "Street")]
    street: String,
    #[tabled(rename = "Floors")]
    floors: usize,
    #[tabled(rename = "Apartments")]
    apartments: usize,
    #[tabled(rename = "Rooms")]
    rooms: usize,
    #[tabled(rename = "Devices")]
    devices: usize,
    #[tabled(rename = "Online")]
    online: usize,
}

impl From<&BuildingCard> for BuildingRow {
    fn from(card: &BuildingCard) -> Self {
        let address = card.address.as_ref();
        Self {
            id: card.id_text(),
            name: card.name.clone(),
            number: address
                .and_then(|a| a.number.clone())
                .unwrap_or_default(),
            street: address.map(|a| a.street.clone()).unwrap_or_default(),
            floors: card.summary.floors,
            apartments: card.summary.spaces,
            rooms: card.summary.rooms,
            devices: card.summary.devices,
            online: card.summary.online,
        }
    }
}

fn detail(card: &BuildingCard) -> String {
    let address = card.address.as_ref();
    [
        format!("ID:         {}", util::or_dash(Some(card.id_text().as_str()))),
        format!("Name:       {}", card.name),
        format!(
            "Number:     {}",
            util::or_dash(address.and_then(|a| a.number.as_deref()))
        ),
        format!("Street:     {}", util::or_dash(address.map(|a| a.street.as_str()))),
        format!("Floors:     {}", card.summary.floors),
        format!("Apartments: {}", card.summary.spaces),
        format!("Rooms:      {}", card.summary.rooms),
        format!("Devices:    {}", card.summary.devices),
        format!("Online:     {}", card.summary.online),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(snapshot: &Snapshot, args: BuildingsArgs, out: &OutputOpts) -> Result<(), CliError> {
    match args.command {
        BuildingsCommand::List => {
            let cards: Vec<BuildingCard> = snapshot
                .buildings()
                .iter()
                .map(|b| BuildingCard::of(b, snapshot))
                .collect();
            let rendered = output::render_list(
                out.format,
                &cards,
                |c| BuildingRow::from(c),
                BuildingCard::id_text,
            )?;
            output::print_output(&rendered, out.quiet);
            Ok(())
        }

        BuildingsCommand::Get { id } => {
            let building = util::resolve_building(snapshot, &id)?;
            let card = BuildingCard::of(building, snapshot);
            let rendered =
                output::render_single(out.format, &card, detail, BuildingCard::id_text)?;
            output::print_output(&rendered, out.quiet);
            Ok(())
        }
    }
}
