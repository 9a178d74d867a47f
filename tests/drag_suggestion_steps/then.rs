//! Then steps for suggestion BDD scenarios.

use super::world::SuggestionWorld;
use rstest_bdd_macros::then;
use wesync::board::domain::SuggestionView;

fn shown(world: &SuggestionWorld) -> Result<SuggestionView, eyre::Report> {
    world
        .suggestion()?
        .ok_or_else(|| eyre::eyre!("expected a suggestion, found none"))
}

fn expect_suggestion(world: &SuggestionWorld, kind: &str, id: &str) -> Result<(), eyre::Report> {
    let bar = shown(world)?;
    if bar.kind.as_str() != kind || bar.task_id.as_str() != id {
        return Err(eyre::eyre!(
            "expected {kind} suggestion for {id}, found {} for {}",
            bar.kind,
            bar.task_id
        ));
    }
    Ok(())
}

#[then(r#"a "{kind}" suggestion is shown for "{id}""#)]
fn suggestion_shown(world: &SuggestionWorld, kind: String, id: String) -> Result<(), eyre::Report> {
    expect_suggestion(world, &kind, &id)
}

#[then(r#"an "{kind}" suggestion is shown for "{id}""#)]
fn assign_suggestion_shown(
    world: &SuggestionWorld,
    kind: String,
    id: String,
) -> Result<(), eyre::Report> {
    expect_suggestion(world, &kind, &id)
}

#[then(r#"the suggestion detail is "{detail}""#)]
fn suggestion_detail(world: &SuggestionWorld, detail: String) -> Result<(), eyre::Report> {
    let bar = shown(world)?;
    if bar.prompt.detail != detail {
        return Err(eyre::eyre!(
            "expected detail {detail:?}, found {:?}",
            bar.prompt.detail
        ));
    }
    Ok(())
}

#[then(r#"the suggestion text is "{text}""#)]
fn suggestion_text(world: &SuggestionWorld, text: String) -> Result<(), eyre::Report> {
    let bar = shown(world)?;
    if bar.prompt.text != text {
        return Err(eyre::eyre!(
            "expected text {text:?}, found {:?}",
            bar.prompt.text
        ));
    }
    Ok(())
}

#[then("no suggestion is shown")]
fn no_suggestion(world: &SuggestionWorld) -> Result<(), eyre::Report> {
    if let Some(bar) = world.suggestion()? {
        return Err(eyre::eyre!("expected no suggestion, found {}", bar.kind));
    }
    Ok(())
}

#[then(r#"the "{kind}" action was performed for "{id}""#)]
fn action_performed(world: &SuggestionWorld, kind: String, id: String) -> Result<(), eyre::Report> {
    let performed = world.dispatcher.performed();
    let [suggestion] = performed.as_slice() else {
        return Err(eyre::eyre!(
            "expected one performed action, found {}",
            performed.len()
        ));
    };
    if suggestion.kind().as_str() != kind || suggestion.task().id().as_str() != id {
        return Err(eyre::eyre!(
            "expected {kind} for {id}, found {} for {}",
            suggestion.kind(),
            suggestion.task().id()
        ));
    }
    Ok(())
}

#[then("no action was performed")]
fn no_action_performed(world: &SuggestionWorld) -> Result<(), eyre::Report> {
    let performed = world.dispatcher.performed();
    if !performed.is_empty() {
        return Err(eyre::eyre!(
            "expected no performed action, found {}",
            performed.len()
        ));
    }
    Ok(())
}
