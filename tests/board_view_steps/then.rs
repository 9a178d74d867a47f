//! Then steps for board visibility BDD scenarios.

use super::world::BoardViewWorld;
use rstest_bdd_macros::then;
use wesync::board::domain::{ColumnView, TaskStatus};

fn column<'a>(world: &'a BoardViewWorld, status: &str) -> Result<&'a ColumnView, eyre::Report> {
    let parsed = TaskStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    world
        .model()?
        .columns
        .iter()
        .find(|column| column.status == parsed)
        .ok_or_else(|| eyre::eyre!("missing column {status}"))
}

#[then("the board shows {count:usize} cards")]
fn board_shows_cards(world: &BoardViewWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world.cards()?.len();
    if shown != count {
        return Err(eyre::eyre!("expected {count} cards, found {shown}"));
    }
    Ok(())
}

#[then("{count:usize} cards are relevant")]
fn cards_are_relevant(world: &BoardViewWorld, count: usize) -> Result<(), eyre::Report> {
    let relevant = world.cards()?.iter().filter(|card| card.relevant).count();
    if relevant != count {
        return Err(eyre::eyre!("expected {count} relevant cards, found {relevant}"));
    }
    Ok(())
}

#[then(r#"the caption is "{caption}""#)]
fn caption_is(world: &BoardViewWorld, caption: String) -> Result<(), eyre::Report> {
    let shown = world.model()?.caption;
    if shown != caption {
        return Err(eyre::eyre!("expected caption {caption:?}, found {shown:?}"));
    }
    Ok(())
}

#[then("no contextual label is shown")]
fn no_contextual_label(world: &BoardViewWorld) -> Result<(), eyre::Report> {
    if let Some(label) = world.model()?.label {
        return Err(eyre::eyre!("expected no label, found {label}"));
    }
    Ok(())
}

#[then(r#"the contextual label is "{label}""#)]
fn contextual_label_is(world: &BoardViewWorld, label: String) -> Result<(), eyre::Report> {
    let shown = world
        .model()?
        .label
        .ok_or_else(|| eyre::eyre!("expected label {label:?}, found none"))?;
    if shown.as_str() != label {
        return Err(eyre::eyre!("expected label {label:?}, found {shown}"));
    }
    Ok(())
}

#[then(r#"the "{status}" column is flagged as a bottleneck"#)]
fn column_is_bottleneck(world: &BoardViewWorld, status: String) -> Result<(), eyre::Report> {
    if !column(world, &status)?.has_bottleneck {
        return Err(eyre::eyre!("expected {status} to be a bottleneck"));
    }
    Ok(())
}

#[then(r#"the "{status}" column is not flagged as a bottleneck"#)]
fn column_is_not_bottleneck(world: &BoardViewWorld, status: String) -> Result<(), eyre::Report> {
    if column(world, &status)?.has_bottleneck {
        return Err(eyre::eyre!("expected {status} not to be a bottleneck"));
    }
    Ok(())
}

#[then(r#"the detail view shows "{title}""#)]
fn detail_view_shows(world: &BoardViewWorld, title: String) -> Result<(), eyre::Report> {
    let detail = world
        .model()?
        .focused_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected an open detail view"))?;
    if detail.card.title != title {
        return Err(eyre::eyre!(
            "expected detail for {title:?}, found {:?}",
            detail.card.title
        ));
    }
    Ok(())
}

#[then("the board is dimmed")]
fn board_is_dimmed(world: &BoardViewWorld) -> Result<(), eyre::Report> {
    if !world.model()?.board_dimmed {
        return Err(eyre::eyre!("expected the board to be dimmed"));
    }
    Ok(())
}
