#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let rocket = npmdeck::create_rocket()?;
    rocket.launch().await?;
    Ok(())
}
