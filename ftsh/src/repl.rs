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

//! A line-oriented REPL over a single, shared [`foldertree::Tree`].
//!
//! Unlike `skysh`, there's no server on the other end of a socket to talk to
//! -- the thing being demonstrated *is* the concurrency, so commands read
//! from stdin are handed off to a small fixed pool of worker threads over an
//! `mpsc` channel rather than being executed inline. Each worker shares the
//! same `Arc<Tree>`, so two commands typed in quick succession can genuinely
//! run concurrently against disjoint parts of the namespace.

use foldertree::Tree;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

const WORKER_COUNT: usize = 4;
const TXT_WELCOME: &str = "ftsh -- foldertree shell. commands: create <path> | list <path> | remove <path> | move <src> <dst> | quit";

enum Command {
    Create(String),
    List(String),
    Remove(String),
    Move(String, String),
}

struct Job {
    command: Command,
    reply: mpsc::Sender<String>,
}

fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    match verb {
        "create" | "list" | "remove" => {
            let path = parts
                .next()
                .ok_or_else(|| format!("usage: {verb} <path>"))?;
            if parts.next().is_some() {
                return Err(format!("usage: {verb} <path>"));
            }
            Ok(Some(match verb {
                "create" => Command::Create(path.to_owned()),
                "list" => Command::List(path.to_owned()),
                _ => Command::Remove(path.to_owned()),
            }))
        }
        "move" => {
            let src = parts.next().ok_or("usage: move <src> <dst>")?;
            let dst = parts.next().ok_or("usage: move <src> <dst>")?;
            if parts.next().is_some() {
                return Err("usage: move <src> <dst>".to_owned());
            }
            Ok(Some(Command::Move(src.to_owned(), dst.to_owned())))
        }
        other => Err(format!("unknown command `{other}`")),
    }
}

fn run_command(tree: &Tree, command: Command) -> String {
    match command {
        Command::Create(path) => match tree.create(&path) {
            Ok(()) => "ok".to_owned(),
            Err(e) => format!("error: {e}"),
        },
        Command::List(path) => match tree.list(&path) {
            Ok(listing) => listing,
            Err(e) => format!("error: {e}"),
        },
        Command::Remove(path) => match tree.remove(&path) {
            Ok(()) => "ok".to_owned(),
            Err(e) => format!("error: {e}"),
        },
        Command::Move(src, dst) => match tree.mv(&src, &dst) {
            Ok(()) => "ok".to_owned(),
            Err(e) => format!("error: {e}"),
        },
    }
}

fn spawn_workers(tree: Arc<Tree>, jobs: mpsc::Receiver<Job>) {
    let jobs = Arc::new(Mutex::new(jobs));
    for id in 0..WORKER_COUNT {
        let tree = tree.clone();
        let jobs = jobs.clone();
        thread::Builder::new()
            .name(format!("ftsh-worker-{id}"))
            .spawn(move || loop {
                let job = { jobs.lock().expect("worker queue mutex poisoned").recv() };
                match job {
                    Ok(Job { command, reply }) => {
                        let result = run_command(&tree, command);
                        log::debug!("worker {id} handled a command");
                        // the reader may have already given up (e.g. on shutdown)
                        let _ = reply.send(result);
                    }
                    Err(_) => break,
                }
            })
            .expect("failed to spawn worker thread");
    }
}

pub fn start(quiet: bool) {
    if !quiet {
        println!("{TXT_WELCOME}");
    }
    let tree = Arc::new(Tree::new());
    let (job_tx, job_rx) = mpsc::channel();
    spawn_workers(tree, job_rx);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        if !quiet {
            print!("> ");
            let _ = stdout.flush();
        }
        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line);
        match read {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                log::error!("failed to read a line from stdin: {e}");
                break;
            }
        }
        let line = line.trim();
        if line == "quit" {
            break;
        }
        let command = match parse_line(line) {
            Ok(None) => continue,
            Ok(Some(command)) => command,
            Err(e) => {
                println!("error: {e}");
                continue;
            }
        };
        let (reply_tx, reply_rx) = mpsc::channel();
        if job_tx.send(Job { command, reply: reply_tx }).is_err() {
            log::error!("worker pool is gone, can't dispatch command");
            break;
        }
        match reply_rx.recv() {
            Ok(result) => println!("{result}"),
            Err(_) => {
                log::error!("worker dropped the reply channel without answering");
                break;
            }
        }
    }
    if !quiet {
        println!("goodbye");
    }
}
