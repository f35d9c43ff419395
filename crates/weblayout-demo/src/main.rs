//! Build a small HUD from text boxes and nested containers on an in-memory
//! tree, then print the resulting tree.

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::Level;
use weblayout::{
    Alignment, IdFactory, LayoutContainer, LayoutType, MemoryTree, Mountable, TextBox,
    tree::dump::dump_ansi, widgets::textbox::TEXTBOX_PREFIX,
};

/// Arrangement strategy selectable on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum Layout {
    /// Block positioning.
    Free,
    /// Flexible row.
    Horizontal,
    /// Flexible column.
    Vertical,
    /// Grid.
    Grid,
}

impl From<Layout> for LayoutType {
    fn from(value: Layout) -> Self {
        match value {
            Layout::Free => Self::Free,
            Layout::Horizontal => Self::Horizontal,
            Layout::Vertical => Self::Vertical,
            Layout::Grid => Self::Grid,
        }
    }
}

/// CLI flags for the layout demo.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Arrangement of the HUD container.
    #[arg(long, value_enum, default_value_t = Layout::Vertical)]
    layout: Layout,

    /// Gap between HUD children, in pixels.
    #[arg(long, default_value_t = 8)]
    spacing: i32,

    /// Colorize the tree dump.
    #[arg(long)]
    color: bool,

    /// Show the debug text box.
    #[arg(long)]
    debug: bool,

    /// Log level written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

/// Run the layout demo.
fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();
    anyhow::ensure!(args.spacing >= 0, "spacing must be non-negative");

    let mut tree = MemoryTree::new();
    let mut ids = IdFactory::default();
    let mut text_ids = IdFactory::new(TEXTBOX_PREFIX);

    let mut hud = LayoutContainer::create(&mut tree, &mut ids, Some("hud"))?;
    hud.set_layout_type(args.layout.into());
    hud.set_spacing(args.spacing);

    let mut hp = TextBox::create(&mut tree, &mut text_ids, "Player HP: 100/100")?;
    hp.set_text("Player HP: 94/100");

    let mut log = TextBox::create(&mut tree, &mut text_ids, "Battle Log:\n")?;
    log.append_text("You hit the Bat for 6 damage.\n");
    log.append_text("The Bat has fled the battle.\n");

    let mut debug = TextBox::create(
        &mut tree,
        &mut text_ids,
        "DEBUG: agent_test1 = 10, agent_test2 = 4",
    )?;
    if !args.debug {
        debug.hide();
    }

    let mut status = LayoutContainer::create(&mut tree, &mut ids, None)?;
    status.set_layout_type(LayoutType::Horizontal);
    status.set_spacing(4);
    hp.mount(&mut tree, &mut status, Alignment::Center)?;
    debug.mount(&mut tree, &mut status, Alignment::End)?;

    status.mount(&mut tree, &mut hud, Alignment::Stretch)?;
    log.mount(&mut tree, &mut hud, Alignment::Start)?;

    hp.sync_from_model(&mut tree)?;
    log.sync_from_model(&mut tree)?;
    debug.sync_from_model(&mut tree)?;
    status.sync_from_model(&mut tree)?;
    hud.sync_from_model(&mut tree)?;

    let dump = if args.color {
        dump_ansi(&tree, *hud.root())?
    } else {
        tree.dump(*hud.root())?
    };
    print!("{dump}");
    Ok(())
}
