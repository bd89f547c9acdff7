/*
 * Created on Thu Jul 31 2025
 *
 * This file is a part of Foldertree
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

//! `ftsh` -- foldertree shell.
//!
//! A thin demonstration binary: no persistence, no network, just a REPL
//! running a fixed pool of worker threads against one shared `foldertree::Tree`.

mod args;
mod repl;

use std::env;

fn main() {
    env_logger::Builder::new()
        .parse_filters(&env::var("FOLDERTREE_LOG").unwrap_or_else(|_| "info".to_owned()))
        .init();

    let opts = match args::parse() {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("ftsh: {e}");
            std::process::exit(0x01);
        }
    };

    repl::start(opts.quiet);
}
