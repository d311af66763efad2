//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_date, run_async};
use rstest_bdd_macros::then;
use tarefas::task::{domain::Task, services::TaskErrorKind};

fn current(world: &TaskLifecycleWorld) -> Result<Option<Task>, eyre::Report> {
    let id = world.current_task()?;
    Ok(run_async(world.service.obtain_by_id(id))?)
}

fn last_error_kind(world: &TaskLifecycleWorld) -> Result<TaskErrorKind, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) => Ok(err.kind()),
        Some(Ok(())) => Err(eyre::eyre!("expected the last request to fail")),
        None => Err(eyre::eyre!("missing request result in scenario world")),
    }
}

#[then(r#"the task is completed on "{completed_on}""#)]
fn task_completed_on(world: &TaskLifecycleWorld, completed_on: String) -> Result<(), eyre::Report> {
    let expected = parse_date(&completed_on)?;
    let task = current(world)?.ok_or_else(|| eyre::eyre!("scenario task vanished"))?;
    if task.completion_date() != Some(expected) {
        return Err(eyre::eyre!(
            "expected completion on {expected}, found {:?}",
            task.completion_date()
        ));
    }
    Ok(())
}

#[then(r#"the request fails with "{message}""#)]
fn request_fails_with(world: &TaskLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected failure {message:?}, got {other:?}")),
    }
}

#[then("the request fails as already finalized")]
fn request_fails_already_finalized(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let kind = last_error_kind(world)?;
    if kind != TaskErrorKind::AlreadyFinalized {
        return Err(eyre::eyre!("expected AlreadyFinalized, got {kind:?}"));
    }
    Ok(())
}

#[then("the request fails validation")]
fn request_fails_validation(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let kind = last_error_kind(world)?;
    if kind != TaskErrorKind::Validation {
        return Err(eyre::eyre!("expected Validation, got {kind:?}"));
    }
    Ok(())
}

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let task = current(world)?.ok_or_else(|| eyre::eyre!("scenario task vanished"))?;
    if task.title().as_str() != title {
        return Err(eyre::eyre!("expected title {title:?}, found {}", task.title()));
    }
    Ok(())
}

#[then("the task no longer exists")]
fn task_no_longer_exists(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    if let Some(task) = current(world)? {
        return Err(eyre::eyre!("task {} still stored", task.id()));
    }
    Ok(())
}

#[then(r#"the listed titles are "{titles}""#)]
fn listed_titles_are(world: &TaskLifecycleWorld, titles: String) -> Result<(), eyre::Report> {
    let listed: Vec<&str> = world
        .listed
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    let expected: Vec<&str> = titles.split(',').collect();
    if listed != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {listed:?}"));
    }
    Ok(())
}

#[then("no tasks are stored")]
fn no_tasks_are_stored(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let all = run_async(world.service.obtain_all())?;
    if !all.is_empty() {
        return Err(eyre::eyre!("expected an empty store, found {} tasks", all.len()));
    }
    Ok(())
}
