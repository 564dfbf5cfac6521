use crate::responses::error_to_response;
use crate::router::handle;
use crate::store::connection::Database;
use astra::Server;
use std::net::SocketAddr;

mod domain;
mod errors;
mod maps;
mod responses;
mod router;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Create the store handle
    let db = Database::new("recycling.sqlite3");

    // 2️⃣ Make sure the key-value table exists
    if let Err(e) = db.init_schema() {
        eprintln!("❌ Storage initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing the store handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
