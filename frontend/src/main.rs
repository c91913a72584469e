// Trunk entry point; the library's `start` hook does the mounting.
fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    println!("ledgerly-frontend runs in the browser; build it with trunk for wasm32.");
}
