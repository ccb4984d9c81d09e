//! Given steps for task mutation BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{domain::TaskId, services::CreateTaskRequest};

#[given(
    r#"a create request "{task_name}" described as "{description}" with priority {priority:i32} for user "{user_id}""#
)]
fn create_request(
    world: &mut TaskWorld,
    task_name: String,
    description: String,
    priority: i32,
    user_id: String,
) {
    world.pending_create = Some(CreateTaskRequest::new(
        task_name,
        description,
        priority,
        user_id,
    ));
}

#[given(r#"an existing task "{task_name}" owned by "{user_id}""#)]
fn existing_task(
    world: &mut TaskWorld,
    task_name: String,
    user_id: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(
        task_name,
        "Summarise the figures for the board",
        3,
        user_id,
    );
    let task = run_async(world.service.create_task(request))
        .wrap_err("create existing task for scenario")?;

    world.target_task_id = Some(task.id());
    world.existing_task = Some(task);
    Ok(())
}

#[given("no existing task")]
fn no_existing_task(world: &mut TaskWorld) {
    world.target_task_id = Some(TaskId::new());
}
