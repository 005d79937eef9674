//! Host-side helper: `cargo run` builds the WASM viewer into `static/pkg`,
//! serves `static/` over HTTP, and optionally exposes it via ngrok.

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::process::{Command, ExitCode, Stdio};
    use std::{thread, time::Duration};

    use clap::Parser;
    use log::{error, info, warn};

    #[derive(Debug, Parser)]
    #[command(about = "Build and serve the cloth mesh viewer")]
    struct Args {
        /// Port for the local HTTP server.
        #[arg(long, default_value_t = 8000)]
        port: u16,

        /// Serve whatever is already in `static/pkg`.
        #[arg(long)]
        skip_build: bool,

        /// Expose the server through an ngrok tunnel.
        #[arg(long)]
        tunnel: bool,
    }

    fn build_wasm() -> bool {
        info!("building WASM pkg …");
        match Command::new("wasm-pack")
            .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
            .status()
        {
            Ok(st) if st.success() => true,
            Ok(_) => {
                error!(
                    "wasm-pack finished with errors. Ensure wasm-pack is installed \
                     (https://rustwasm.github.io/wasm-pack/)."
                );
                false
            }
            Err(_) => {
                warn!(
                    "wasm-pack not found in PATH. Skipping wasm build; \
                     the site may serve stale artifacts."
                );
                true
            }
        }
    }

    pub fn run() -> ExitCode {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        let args = Args::parse();

        if !args.skip_build && !build_wasm() {
            return ExitCode::FAILURE;
        }

        let port = args.port.to_string();
        info!("launching local server at http://127.0.0.1:{port} …");
        let server = Command::new("python3")
            .args(["-m", "http.server", &port, "--directory", "static"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut server = match server {
            Ok(child) => child,
            Err(err) => {
                error!("failed to start http server: {err}");
                return ExitCode::FAILURE;
            }
        };

        if args.tunnel {
            match Command::new("ngrok")
                .args(["http", &port])
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .spawn()
            {
                Ok(_) => info!("ngrok tunnel starting …"),
                Err(_) => {
                    warn!("ngrok not found. Install it to expose the site over the internet.")
                }
            }
        }

        loop {
            match server.try_wait() {
                Ok(Some(status)) => {
                    error!("http server exited with {status}");
                    return ExitCode::FAILURE;
                }
                Ok(None) => thread::sleep(Duration::from_secs(1)),
                Err(err) => {
                    error!("lost track of http server: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    host::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
