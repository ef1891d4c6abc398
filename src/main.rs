use std::error::Error;

use log::{error, info};

use blog_users::config::CONFIG;
use blog_users::constants::{FIELD_BLOG, FIELD_NAME};
use blog_users::{User, UserRepository};

fn log_users(label: &str, users: &[User]) {
    info!("{} ({} users)", label, users.len());
    for user in users {
        info!("  {}", user);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Connecting to MongoDB at {}...", CONFIG.mongodb_uri);
    let repository = UserRepository::from_config(&CONFIG).await?;

    if !repository.check_connection().await {
        error!("MongoDB is not reachable at {}", CONFIG.mongodb_uri);
        return Err("database unreachable".into());
    }
    info!("Connected to MongoDB successfully!");

    let mut nikola = User::new("Nikola", 30, "rubikscode.net", "Beograd");
    repository.insert_user(&mut nikola).await?;
    let mut vanja = User::new("Vanja", 27, "eventroom.net", "Beograd");
    repository.insert_user(&mut vanja).await?;

    log_users("All users", &repository.get_all_users().await?);
    log_users(
        "Users named Nikola",
        &repository.get_users_by_field(FIELD_NAME, "Nikola").await?,
    );
    log_users("First page of two", &repository.get_users(0, 2).await?);

    if let Some(id) = nikola.id {
        let updated = repository
            .update_user(id, FIELD_BLOG, "Rubik's Code")
            .await?;
        info!("Updated Nikola's blog: {}", updated);
        log_users(
            "Nikola after update",
            &repository.get_users_by_field(FIELD_NAME, "Nikola").await?,
        );
    }

    let mut simona = User::new("Simona", 0, "babystuff.com", "Beograd");
    repository.insert_user(&mut simona).await?;
    log_users("All users", &repository.get_all_users().await?);

    for user in repository.get_users_by_field(FIELD_NAME, "Simona").await? {
        if let Some(id) = user.id {
            let deleted = repository.delete_user_by_id(id).await?;
            info!("Deleted Simona ({}): {}", id, deleted);
        }
    }
    log_users("All users", &repository.get_all_users().await?);

    repository.create_index_on_name_field().await?;

    let removed = repository.delete_all_users().await?;
    info!("Removed {} users", removed);
    log_users("All users", &repository.get_all_users().await?);

    repository.shutdown().await;
    Ok(())
}
