// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;

use crate::cmd::check::check_collection;
use crate::cmd::favorites::print_favorites;
use crate::cmd::serve::server::start_server;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the card deck in the browser.
    Serve {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Override the configured port.
        #[arg(long)]
        port: Option<u16>,
        /// Do not open the browser.
        #[arg(long)]
        no_browser: bool,
    },
    /// List favorited questions.
    Favorites {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Print catalog and favorites statistics as JSON.
    Stats {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Validate the collection directory.
    Check {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            directory,
            port,
            no_browser,
        } => start_server(directory, port, no_browser).await,
        Command::Favorites { directory } => print_favorites(directory),
        Command::Stats { directory } => print_stats(directory),
        Command::Check { directory } => check_collection(directory),
    }
}
