use rand::Rng;
use rand::distributions::Alphanumeric;

// Draw `length` characters uniformly from [A-Za-z0-9]
pub fn random_alphanumeric<R>(rng: &mut R, length: usize) -> String
where
    R: Rng + ?Sized,
{
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

// Render an error followed by every cause in its `source` chain.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
