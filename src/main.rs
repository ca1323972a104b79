use authstress::error::AppResult;

fn main() -> AppResult<()> {
    authstress::run()
}
