use crate::session::CliSession;
use tracing::instrument;

#[instrument(skip_all)]
pub fn base(session: &CliSession) -> miette::Result<()> {
    println!("{}", session.client.node_base());

    Ok(())
}

#[instrument(skip_all)]
pub fn node_path(session: &CliSession) -> miette::Result<()> {
    println!("{}", session.client.node_path().display());

    Ok(())
}

#[instrument(skip_all)]
pub fn node_url(session: &CliSession) -> miette::Result<()> {
    println!("{}", session.client.node_url());

    Ok(())
}

#[instrument(skip_all)]
pub fn npm_path(session: &CliSession) -> miette::Result<()> {
    println!("{}", session.client.npm_path().display());

    Ok(())
}

#[instrument(skip_all)]
pub fn npm_url(session: &CliSession) -> miette::Result<()> {
    println!("{}", session.client.npm_url());

    Ok(())
}
