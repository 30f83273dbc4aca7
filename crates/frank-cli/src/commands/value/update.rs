use frank_db::updates::value::ValueUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::clearable_text;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = ValueUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = clearable_text(params.description.as_ref()) {
        builder = builder.description(description);
    }

    let value = ctx.service.update_value(&params.id, builder.build()).await?;
    output(&value, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none() && params.description.is_none() {
        anyhow::bail!("At least one of --title or --description must be provided");
    }
    Ok(())
}
