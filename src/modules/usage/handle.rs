use crate::api::error;
use crate::modules::usage::service::UsageService;

pub async fn show(service: &UsageService) -> Result<(), error::Error> {
    let usage = service.usage().await?;

    println!("API requests   {:>6} / {} today   {:>6} / {} this month",
        usage.api_count_day, usage.api_count_day_limit,
        usage.api_count_month, usage.api_count_month_limit);
    println!("Short links    {:>6} / {} today   {:>6} / {} this month",
        usage.link_count_day, usage.link_count_day_limit,
        usage.link_count_month, usage.link_count_month_limit);
    println!("Text shares    {:>6} / {} today   {:>6} / {} this month",
        usage.text_count_day, usage.text_count_day_limit,
        usage.text_count_month, usage.text_count_month_limit);
    println!("Uploads        {:>6} / {} today   {:>6} / {} this month",
        usage.upload_count_day, usage.upload_count_day_limit,
        usage.upload_count_month, usage.upload_count_month_limit);
    println!("QR codes       {:>6} / {} today   {:>6} / {} this month",
        usage.qrcode_count_day, usage.qrcode_count_day_limit,
        usage.qrcode_count_month, usage.qrcode_count_month_limit);
    println!("Storage        {} MB / {} MB across {} files",
        usage.storage_usage_mb, usage.storage_usage_limit_mb, usage.file_count);

    Ok(())
}
