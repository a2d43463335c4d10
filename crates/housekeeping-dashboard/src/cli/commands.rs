/*
[INPUT]:  Parsed subcommands and a TaskDashboard bound to the Task Service
[OUTPUT]: One-shot operations printed to stdout; inline errors become a failing exit
[POS]:    CLI layer - non-interactive front-end over the controller
[UPDATE]: When adding subcommands or changing printed output
*/

use anyhow::{Result, bail};
use housekeeping_adapter::{Task, TaskStatus};
use tracing::info;

use housekeeping_dashboard::DashboardConfig;
use housekeeping_dashboard::controller::{CleaningField, CleaningTaskRecord, TaskDashboard, TaskField};
use housekeeping_dashboard::format::{format_timestamp, or_missing};

pub async fn run_list(dashboard: &TaskDashboard) -> Result<()> {
    dashboard.load_tasks().await;
    let state = dashboard.snapshot().await;
    if let Some(err) = state.token_error().or(state.task_error()) {
        bail!("{err}");
    }

    if state.tasks().is_empty() {
        println!("No hay tareas registradas.");
        return Ok(());
    }
    print_task_header();
    for task in state.tasks() {
        print_task_row(task);
    }
    info!(count = state.tasks().len(), "listed tasks");
    Ok(())
}

pub async fn run_create(
    dashboard: &TaskDashboard,
    description: &str,
    assigned_employee: &str,
    status: TaskStatus,
) -> Result<()> {
    dashboard
        .create_task(description, assigned_employee, status)
        .await;
    let state = dashboard.snapshot().await;

    let missing: Vec<&str> = TaskField::REQUIRED
        .into_iter()
        .filter(|field| state.task_form().field_invalid(*field))
        .map(TaskField::error_message)
        .collect();
    if !missing.is_empty() {
        bail!("{}", missing.join(" "));
    }
    if let Some(err) = state.task_creation_error() {
        bail!("{err}");
    }

    if let Some(message) = state.task_creation_message() {
        println!("{message}");
    }
    if let Some(task) = state.tasks().first() {
        print_task_header();
        print_task_row(task);
    }
    Ok(())
}

pub async fn run_update(dashboard: &TaskDashboard, task_id: &str, status: TaskStatus) -> Result<()> {
    dashboard.load_tasks().await;
    let state = dashboard.snapshot().await;
    if let Some(err) = state.token_error().or(state.task_error()) {
        bail!("{err}");
    }
    let Some(task) = state.task(task_id) else {
        bail!("task {task_id} not found");
    };
    if task.status == status {
        println!("La tarea {task_id} ya está en estado {status}.");
        return Ok(());
    }

    dashboard.select_pending_status(task_id, status).await;
    dashboard.update_task_status(task_id).await;
    let state = dashboard.snapshot().await;
    if let Some(err) = state.task_update_error() {
        bail!("{err}");
    }

    if let Some(message) = state.task_update_message() {
        println!("{message}");
    }
    if let Some(task) = state.task(task_id) {
        print_task_header();
        print_task_row(task);
    }
    Ok(())
}

pub async fn run_clean(
    dashboard: &TaskDashboard,
    hotel_name: &str,
    room_code: &str,
    new_status: Option<&str>,
) -> Result<()> {
    if let Some(new_status) = new_status {
        dashboard
            .update(|state| state.cleaning_form_mut().new_status = new_status.to_string())
            .await;
    }
    dashboard.generate_cleaning_task(hotel_name, room_code).await;
    let state = dashboard.snapshot().await;

    let missing: Vec<&str> = CleaningField::REQUIRED
        .into_iter()
        .filter(|field| state.cleaning_form().field_invalid(*field))
        .map(CleaningField::error_message)
        .collect();
    if !missing.is_empty() {
        bail!("{}", missing.join(" "));
    }
    if let Some(err) = state.cleaning_error() {
        bail!("{err}");
    }

    if let Some(message) = state.cleaning_message() {
        println!("{message}");
    }
    if let Some(record) = state.cleaning_tasks().first() {
        print_cleaning_record(record);
    }
    Ok(())
}

pub fn run_check_config(config: &DashboardConfig) -> Result<()> {
    config.validate()?;
    print!("{}", config.to_yaml()?);
    println!("# configuration OK");
    Ok(())
}

fn print_task_header() {
    println!(
        "{:<10} {:<32} {:<20} {:<12} {:<15} {:<15}",
        "ID", "Descripción", "Empleado", "Estado", "Inicio", "Fin"
    );
}

fn print_task_row(task: &Task) {
    println!(
        "{:<10} {:<32} {:<20} {:<12} {:<15} {:<15}",
        task.task_id,
        task.description,
        task.assigned_employee,
        task.status,
        format_timestamp(task.start_time.as_deref()),
        format_timestamp(task.end_time.as_deref()),
    );
}

fn print_cleaning_record(record: &CleaningTaskRecord) {
    let task_id = record
        .task_id
        .map_or_else(|| or_missing(None), |id| id.to_string());
    let minutes = record
        .estimated_minutes
        .map_or_else(|| or_missing(None), |minutes| format!("{minutes} min"));
    println!("Tarea:       {task_id}");
    println!("Hotel:       {}", or_missing(record.hotel_name.as_deref()));
    println!("Habitación:  {}", or_missing(record.room_code.as_deref()));
    println!("Descripción: {}", or_missing(record.description.as_deref()));
    println!("Asignada a:  {}", or_missing(record.assigned_to.as_deref()));
    println!("Estimado:    {minutes}");
    println!("Estado:      {}", or_missing(record.status.as_deref()));
    println!("Creada:      {}", format_timestamp(record.created_at.as_deref()));
}
