use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use designs::store::{DesignStore, StoreError};
use glam::DVec2;
use scene::model::{FurnitureId, FurnitureKind, PartialFurniture};
use scene::session::Session;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("no design with id `{0}`")]
    RecordNotFound(String),
    #[error("no furniture item with id {0}")]
    ItemNotFound(FurnitureId),
    #[error("item {0} is not a table")]
    NotATable(FurnitureId),
    #[error("unknown furniture kind `{0}` (expected `chair` or `table`)")]
    UnknownKind(String),
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "roomplan", about = "Room layout designer and design library CLI")]
struct Cli {
    /// Path of the design library file.
    #[arg(long, env = "ROOMPLAN_STORE", default_value = "designs.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List designs, most recently updated first.
    List,
    /// Create a new design.
    Create {
        #[arg(long, default_value = "New Room Design")]
        name: String,
    },
    /// Print one design record.
    Show { id: String },
    /// Rename a design.
    Rename {
        id: String,
        #[arg(long)]
        name: String,
    },
    /// Duplicate a design under a new id.
    Duplicate { id: String },
    /// Delete a design.
    Delete { id: String },
    /// Edit the layout inside a design.
    Design(DesignCommand),
}

#[derive(Args, Debug)]
struct DesignCommand {
    /// Design id; opening an unknown id creates a default design under it.
    id: String,

    #[command(subcommand)]
    command: DesignSubcommand,
}

#[derive(Subcommand, Debug)]
enum DesignSubcommand {
    /// Add a furniture item (`chair` or `table`) at the room center.
    Add { kind: String },
    /// Move an item to a world-space position; the walls clamp the target.
    Move {
        item_id: FurnitureId,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        z: f64,
    },
    /// Rotate an item, in degrees from 0 to 360.
    Rotate {
        item_id: FurnitureId,
        #[arg(long, allow_hyphen_values = true)]
        degrees: f64,
    },
    /// Resize a table's footprint, in meters.
    TableSize {
        item_id: FurnitureId,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        depth: f64,
    },
    /// Apply a sparse JSON update (position/rotation/color/size) to an item.
    Update {
        item_id: FurnitureId,
        #[arg(long)]
        json: String,
    },
    /// Remove an item.
    Remove { item_id: FurnitureId },
    /// Resize the room, in meters.
    Room {
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
        #[arg(long)]
        depth: f64,
    },
    /// Set the ambient light intensity.
    Light {
        #[arg(long)]
        intensity: f64,
    },
    /// Set the wall color.
    WallColor { color: String },
    /// Set the floor color.
    FloorColor { color: String },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut store = DesignStore::load(cli.store);

    match cli.command {
        Command::List => run_list(&store),
        Command::Create { name } => run_create(&mut store, &name),
        Command::Show { id } => run_show(&store, &id),
        Command::Rename { id, name } => run_rename(&mut store, &id, &name),
        Command::Duplicate { id } => run_duplicate(&mut store, &id),
        Command::Delete { id } => run_delete(&mut store, &id),
        Command::Design(design) => run_design(&mut store, design),
    }
}

fn run_list(store: &DesignStore) -> Result<(), CliError> {
    let json = serde_json::to_value(store.recent_first())?;
    print_json(&json)
}

fn run_create(store: &mut DesignStore, name: &str) -> Result<(), CliError> {
    let record = store.create(name)?;
    print_json(&serde_json::to_value(record)?)
}

fn run_show(store: &DesignStore, id: &str) -> Result<(), CliError> {
    let record = store
        .get(id)
        .ok_or_else(|| CliError::RecordNotFound(id.to_string()))?;
    print_json(&serde_json::to_value(record)?)
}

fn run_rename(store: &mut DesignStore, id: &str, name: &str) -> Result<(), CliError> {
    if !store.rename(id, name)? {
        return Err(CliError::RecordNotFound(id.to_string()));
    }
    let record = store
        .get(id)
        .ok_or_else(|| CliError::RecordNotFound(id.to_string()))?;
    print_json(&serde_json::to_value(record)?)
}

fn run_duplicate(store: &mut DesignStore, id: &str) -> Result<(), CliError> {
    let copy = store
        .duplicate(id)?
        .ok_or_else(|| CliError::RecordNotFound(id.to_string()))?;
    print_json(&serde_json::to_value(copy)?)
}

fn run_delete(store: &mut DesignStore, id: &str) -> Result<(), CliError> {
    if !store.delete(id)? {
        return Err(CliError::RecordNotFound(id.to_string()));
    }
    print_json(&serde_json::json!({ "deleted": id }))
}

/// Open the design, apply one edit through the interaction engine, and save
/// the result back into its record.
fn run_design(store: &mut DesignStore, design: DesignCommand) -> Result<(), CliError> {
    let record = store.open(&design.id)?;
    let mut session = Session::from_design(&record.data);

    let output = apply_design_command(&mut session, design.command)?;

    store.save_data(&record.id, &record.name, &session.to_design())?;
    print_json(&output)
}

fn apply_design_command(
    session: &mut Session,
    command: DesignSubcommand,
) -> Result<Value, CliError> {
    match command {
        DesignSubcommand::Add { kind } => {
            let id = session.add_furniture(parse_kind(&kind)?);
            item_json(session, id)
        }
        DesignSubcommand::Move { item_id, x, z } => {
            require_item(session, item_id)?;
            if !session.move_furniture(item_id, DVec2::new(x, z)) {
                return Err(CliError::InvalidValue("coordinates must be finite"));
            }
            item_json(session, item_id)
        }
        DesignSubcommand::Rotate { item_id, degrees } => {
            require_item(session, item_id)?;
            if !session.set_rotation_degrees(item_id, degrees) {
                return Err(CliError::InvalidValue("degrees must be finite"));
            }
            item_json(session, item_id)
        }
        DesignSubcommand::TableSize { item_id, width, depth } => {
            let item = session
                .model()
                .item(item_id)
                .ok_or(CliError::ItemNotFound(item_id))?;
            if item.kind != FurnitureKind::Table {
                return Err(CliError::NotATable(item_id));
            }
            if !session.set_table_span(item_id, width, depth) {
                return Err(CliError::InvalidValue("spans must be finite"));
            }
            item_json(session, item_id)
        }
        DesignSubcommand::Update { item_id, json } => {
            let partial: PartialFurniture = serde_json::from_str(&json)?;
            if !session.update_furniture(item_id, &partial) {
                return Err(CliError::ItemNotFound(item_id));
            }
            item_json(session, item_id)
        }
        DesignSubcommand::Remove { item_id } => {
            if !session.delete_furniture(item_id) {
                return Err(CliError::ItemNotFound(item_id));
            }
            design_json(session)
        }
        DesignSubcommand::Room { width, height, depth } => {
            session.set_room_size(width, height, depth);
            design_json(session)
        }
        DesignSubcommand::Light { intensity } => {
            session.set_light_intensity(intensity);
            design_json(session)
        }
        DesignSubcommand::WallColor { color } => {
            session.set_wall_color(color);
            design_json(session)
        }
        DesignSubcommand::FloorColor { color } => {
            session.set_floor_color(color);
            design_json(session)
        }
    }
}

fn parse_kind(value: &str) -> Result<FurnitureKind, CliError> {
    match value {
        "chair" => Ok(FurnitureKind::Chair),
        "table" => Ok(FurnitureKind::Table),
        _ => Err(CliError::UnknownKind(value.to_string())),
    }
}

fn require_item(session: &Session, id: FurnitureId) -> Result<(), CliError> {
    if session.model().item(id).is_none() {
        return Err(CliError::ItemNotFound(id));
    }
    Ok(())
}

fn item_json(session: &Session, id: FurnitureId) -> Result<Value, CliError> {
    let item = session
        .model()
        .item(id)
        .ok_or(CliError::ItemNotFound(id))?;
    Ok(serde_json::to_value(item)?)
}

fn design_json(session: &Session) -> Result<Value, CliError> {
    Ok(serde_json::to_value(session.to_design())?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
