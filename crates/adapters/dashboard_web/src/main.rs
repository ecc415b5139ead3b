fn main() {
    terrarium_dashboard_web::run();
}
