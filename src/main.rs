fn main() {
    fieldpath::cli::run();
}
