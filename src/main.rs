fn main() {
    relx::run_cli();
}
