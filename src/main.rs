fn main() {
    #[cfg(target_arch = "wasm32")]
    blackcat_club::mount();
}
