use anyhow::Result;
use std::path::Path;

pub fn run(root: &Path, port: u16, no_open: bool) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let root_buf = root.to_path_buf();

    rt.block_on(async move {
        // Bind here rather than in the server so a port of 0 can be reported
        // with the OS-assigned value before anything connects.
        let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("Playbook UI → http://localhost:{actual_port}");

        tokio::select! {
            res = playbook_server::serve_on(root_buf, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
