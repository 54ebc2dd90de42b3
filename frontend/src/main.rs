fn main() {
    campusiq_frontend::run();
}
