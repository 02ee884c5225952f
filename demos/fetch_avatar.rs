use std::path::PathBuf;

use anyhow::{bail, Result};

use gravatar::{AvatarOptions, DefaultImage, EmailHash, Gravatar, Scheme};

/// Downloads the avatar of an email address and prints its profile.
///
/// Usage: `cargo run --example fetch_avatar -- <email> [output.png]`
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(email) = args.next() else {
        bail!("usage: fetch_avatar <email> [output.png]");
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("avatar.png"));

    let gravatar = Gravatar::new()?;
    let hash = EmailHash::from_email(&email);
    println!("{}", hash);

    let options = AvatarOptions::new()
        .with_size(256)?
        .with_default(DefaultImage::Retro);
    println!("{}", gravatar.avatar_url(Scheme::Https, &hash, &options));

    let image = gravatar.fetch_avatar(
        Scheme::Https,
        hash.with_extension("png"),
        &options,
    )?;
    std::fs::write(&output, &image)?;
    println!("Saved {} bytes to {}", image.len(), output.display());

    let profile = gravatar.fetch_profile(Scheme::Https, &hash)?;
    if profile.is_empty() {
        println!("No profile");
    } else {
        println!("{}", profile.preferred_username);
        println!("{}", profile.profile_url);
    }

    Ok(())
}
