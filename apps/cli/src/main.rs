//! `connecttoolcli` - command-line client for the ConnectTool service.

use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = connecttool_cli::run(std::env::args_os(), &mut io::stdout(), &mut io::stderr()).await;
    std::process::exit(code);
}
