//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_date, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tarefas::task::domain::TaskPayload;

#[given(r#"today is "{today}""#)]
fn today_is(world: &mut TaskLifecycleWorld, today: String) -> Result<(), eyre::Report> {
    world.clock.set_today(parse_date(&today)?);
    Ok(())
}

#[given(r#"a task titled "{title}" planned for "{planned}""#)]
fn task_exists(
    world: &mut TaskLifecycleWorld,
    title: String,
    planned: String,
) -> Result<(), eyre::Report> {
    let payload = TaskPayload::new(title).with_planned_completion_date(parse_date(&planned)?);
    let task = run_async(world.service.include(payload)).wrap_err("include scenario task")?;
    world.current_task = Some(task.id());
    Ok(())
}

#[given("the task has been finalized")]
fn task_has_been_finalized(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.current_task()?;
    run_async(world.service.finalize(id)).wrap_err("finalize scenario task")?;
    Ok(())
}
