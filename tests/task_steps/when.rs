//! When steps for task mutation BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::UpdateTaskRequest;

#[when("the task is created")]
fn create_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_create
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending create request in scenario world"))?;
    world.last_result = Some(run_async(world.service.create_task(request)));
    Ok(())
}

#[when(r#"user "{user_id}" marks the task as done"#)]
fn mark_done(world: &mut TaskWorld, user_id: String) -> Result<(), eyre::Report> {
    let request = UpdateTaskRequest::new(world.target()?, user_id).with_is_done(true);
    world.last_result = Some(run_async(world.service.update_task(request)));
    Ok(())
}

#[when(r#"user "{user_id}" sets the priority to {priority:i32}"#)]
fn set_priority(world: &mut TaskWorld, user_id: String, priority: i32) -> Result<(), eyre::Report> {
    let request = UpdateTaskRequest::new(world.target()?, user_id).with_priority(priority);
    world.last_result = Some(run_async(world.service.update_task(request)));
    Ok(())
}

#[when(r#"user "{user_id}" renames the task to "{task_name}""#)]
fn rename(world: &mut TaskWorld, user_id: String, task_name: String) -> Result<(), eyre::Report> {
    let request = UpdateTaskRequest::new(world.target()?, user_id).with_task_name(task_name);
    world.last_result = Some(run_async(world.service.update_task(request)));
    Ok(())
}
