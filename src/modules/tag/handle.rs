use crate::api::error;
use crate::modules::tag::service::TagService;

pub async fn list(service: &TagService) -> Result<(), error::Error> {
    let tags = service.list().await?;

    if tags.is_empty() {
        println!("No tags");
        return Ok(());
    }

    for tag in tags {
        println!("{}\t{}", tag.id, tag.name);
    }
    Ok(())
}
