use frank_core::dates;
use frank_core::enums::Table;
use frank_core::views::QuadrantMatrix;
use frank_db::repos::todos::NewTodo;
use serde_json::{Map, Value};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::TodoCommands;
use crate::commands::shared::confirm::{confirm_delete, declined};
use crate::context::AppContext;
use crate::output::output;

mod update;

/// Handle `frank todo`.
pub async fn handle(
    action: &TodoCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TodoCommands::List => {
            let view = ctx.service.todo_list_view(dates::today()).await?;
            output(&view, flags.format)
        }
        TodoCommands::Matrix => {
            let matrix = ctx.service.quadrant_matrix().await?;
            if flags.format == OutputFormat::Table {
                output(&matrix_sections(&matrix)?, flags.format)
            } else {
                output(&matrix, flags.format)
            }
        }
        TodoCommands::Add(args) => {
            let todo = ctx
                .service
                .create_todo(NewTodo {
                    title: args.title.clone(),
                    content: args.content.clone(),
                    due_date: args.due,
                    quadrant: args.quadrant.unwrap_or_default(),
                    weekly_plan_id: args.week.clone(),
                })
                .await?;
            tracing::info!(id = %todo.id, quadrant = %todo.quadrant, "to-do created");
            output(&todo, flags.format)
        }
        TodoCommands::Edit(args) => update::run(args, ctx, flags).await,
        TodoCommands::Toggle { id } => {
            let todo = ctx.service.toggle_todo(id).await?;
            tracing::info!(id = %todo.id, completed = todo.completed, "to-do toggled");
            output(&todo, flags.format)
        }
        TodoCommands::Delete { id, yes } => {
            if !confirm_delete(Table::Todos, id, *yes)? {
                return output(&declined(Table::Todos, id), flags.format);
            }
            output(&ctx.service.delete_todo(id).await?, flags.format)
        }
    }
}

/// One titled section per quadrant so table output lists the to-dos
/// themselves.
fn matrix_sections(matrix: &QuadrantMatrix) -> anyhow::Result<Map<String, Value>> {
    let mut sections = Map::new();
    for cell in &matrix.cells {
        sections.insert(
            format!("{} {}", cell.quadrant, cell.label),
            serde_json::to_value(&cell.todos)?,
        );
    }
    Ok(sections)
}
