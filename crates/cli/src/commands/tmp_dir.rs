use crate::session::CliSession;
use clap::Args;
use tracing::instrument;

#[derive(Args, Clone, Debug)]
pub struct TmpDirArgs {
    #[arg(default_value = "", help = "Prefix of the directory name")]
    pub prefix: String,
}

#[instrument(skip(session))]
pub fn tmp_dir(session: &CliSession, args: TmpDirArgs) -> miette::Result<()> {
    let dir = session.client.try_tmp_dir(&args.prefix)?;

    println!("{}", dir.display());

    Ok(())
}
