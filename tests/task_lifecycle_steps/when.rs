//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_date, run_async};
use rstest_bdd_macros::when;
use tarefas::task::domain::TaskPayload;

#[when("the task is finalized")]
fn finalize_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?;
    world.last_result = Some(run_async(world.service.finalize(id)));
    Ok(())
}

#[when(r#"the task is retitled "{title}""#)]
fn retitle_task(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.current_task()?;
    let current = run_async(world.service.obtain_by_id(id))?
        .ok_or_else(|| eyre::eyre!("scenario task {id} vanished"))?;
    let payload = TaskPayload::new(title)
        .with_optional_long_description(current.long_description().map(str::to_owned))
        .with_planned_completion_date(current.planned_completion_date());
    let result = run_async(world.service.update(id, payload)).map(drop);
    world.last_result = Some(result);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?;
    world.last_result = Some(run_async(world.service.delete(id)));
    Ok(())
}

#[when("overdue tasks are requested")]
fn request_overdue(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let today = world.service.today();
    world.listed = run_async(world.service.obtain_overdue(today))?;
    Ok(())
}

#[when(r#"a task titled "{title}" planned for "{planned}" is included"#)]
fn include_task(
    world: &mut TaskLifecycleWorld,
    title: String,
    planned: String,
) -> Result<(), eyre::Report> {
    let payload = TaskPayload::new(title).with_planned_completion_date(parse_date(&planned)?);
    let result = run_async(world.service.include(payload));
    if let Ok(ref task) = result {
        world.current_task = Some(task.id());
    }
    world.last_result = Some(result.map(drop));
    Ok(())
}
