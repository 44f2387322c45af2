fn main() {
    seedpicker::cli::run();
}
