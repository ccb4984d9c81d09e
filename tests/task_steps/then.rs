//! Then steps for task mutation BDD scenarios.

use super::world::TaskWorld;
use rstest_bdd_macros::then;
use taskboard::task::domain::Task;

fn succeeded(world: &TaskWorld) -> Result<&Task, eyre::Report> {
    world
        .last_result()?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected operation failure: {err}"))
}

#[then("the created task is not done")]
fn created_task_not_done(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = succeeded(world)?;
    eyre::ensure!(!task.is_done(), "expected a new task to be not done");
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "expected matching timestamps at creation"
    );
    Ok(())
}

#[then(r#"the created task is named "{task_name}" with priority {priority:i32} for user "{user_id}""#)]
fn created_task_fields(
    world: &TaskWorld,
    task_name: String,
    priority: i32,
    user_id: String,
) -> Result<(), eyre::Report> {
    let task = succeeded(world)?;
    eyre::ensure!(
        task.task_name() == task_name,
        "expected name {task_name}, found {}",
        task.task_name()
    );
    eyre::ensure!(
        i32::from(task.priority()) == priority,
        "expected priority {priority}, found {}",
        task.priority()
    );
    eyre::ensure!(
        task.user_id().as_str() == user_id,
        "expected owner {user_id}, found {}",
        task.user_id()
    );
    Ok(())
}

#[then(r#"the operation fails with "{message}""#)]
fn operation_fails_with(world: &TaskWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Ok(task) => Err(eyre::eyre!("expected failure, got task {}", task.id())),
        Err(err) if err.to_string() == message => Ok(()),
        Err(err) => Err(eyre::eyre!("expected \"{message}\", got \"{err}\"")),
    }
}

#[then(r#"the updated task is named "{task_name}""#)]
fn updated_task_named(world: &TaskWorld, task_name: String) -> Result<(), eyre::Report> {
    let task = succeeded(world)?;
    eyre::ensure!(
        task.task_name() == task_name,
        "expected name {task_name}, found {}",
        task.task_name()
    );
    Ok(())
}

#[then("the updated task keeps its description, priority and completion flag")]
fn updated_task_keeps_fields(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = succeeded(world)?;
    let original = world
        .existing_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing existing task in scenario world"))?;
    eyre::ensure!(task.description() == original.description(), "description changed");
    eyre::ensure!(task.priority() == original.priority(), "priority changed");
    eyre::ensure!(task.is_done() == original.is_done(), "completion flag changed");
    eyre::ensure!(task.tags() == original.tags(), "tags changed");
    Ok(())
}
