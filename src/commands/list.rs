use crate::core::{
    command_init::{CommandContext, CommandInit},
    error::Result,
    output::print_file_list,
    templates::{render_template, TemplateContext, TEMPLATES},
};

pub async fn execute_list(repo: Option<&str>, branch: Option<&str>, search: Option<&str>) -> Result<()> {
    let ctx = CommandInit::initialize(repo, branch)?;
    list_files(&ctx, search).await
}

pub async fn list_files(ctx: &CommandContext, search: Option<&str>) -> Result<()> {
    let mut index = ctx.load_index().await?;
    if let Some(term) = search {
        index.search(term);
    }

    print_repository_header(ctx);
    print_file_list(&index, None);
    Ok(())
}

pub fn print_repository_header(ctx: &CommandContext) {
    let repository = ctx.repository_label();
    let context = TemplateContext {
        repository: Some(&repository),
        branch: Some(&ctx.config.repository.branch),
        ..Default::default()
    };
    println!("\n{}", render_template(TEMPLATES.header_repository, &context));
}
