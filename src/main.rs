fn main() {
    ghost::run_cli();
}
