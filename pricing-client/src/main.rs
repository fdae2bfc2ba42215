fn main() {
    pricing_client::launch();
}
