//! Page wiring for the four equipment inventories.
//!
//! The add and edit forms of each equipment type carry exactly the columns
//! of its table, so each `*Input` DTO is read straight from the form.

use inventario_db::models::chair::Chair;
use inventario_db::models::computer::Computer;
use inventario_db::models::folder::Folder;
use inventario_db::models::motor::Motor;

use crate::handlers::resource::Controller;

impl Controller for Computer {
    const COLLECTION: &'static str = "computadoras";
    const MEMBER: &'static str = "computadora";

    const ADDED: &'static str = "Computadora agregada exitosamente";
    const UPDATED: &'static str = "Computadora actualizada exitosamente";
    const DELETED: &'static str = "Computadora eliminada exitosamente";
}

impl Controller for Folder {
    const COLLECTION: &'static str = "carpetas";
    const MEMBER: &'static str = "carpeta";

    const ADDED: &'static str = "Carpeta agregada exitosamente";
    const UPDATED: &'static str = "Carpeta actualizada exitosamente";
    const DELETED: &'static str = "Carpeta eliminada exitosamente";
}

impl Controller for Chair {
    const COLLECTION: &'static str = "sillas";
    const MEMBER: &'static str = "silla";

    const ADDED: &'static str = "Silla agregada exitosamente";
    const UPDATED: &'static str = "Silla actualizada exitosamente";
    const DELETED: &'static str = "Silla eliminada exitosamente";
}

impl Controller for Motor {
    const COLLECTION: &'static str = "motores";
    const MEMBER: &'static str = "motor";

    const ADDED: &'static str = "Motor agregado exitosamente";
    const UPDATED: &'static str = "Motor actualizado exitosamente";
    const DELETED: &'static str = "Motor eliminado exitosamente";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::resource::FormInput;

    #[test]
    fn list_paths_use_plural_segments() {
        assert_eq!(Computer::list_path(), "/computadoras");
        assert_eq!(Folder::list_path(), "/carpetas");
        assert_eq!(Chair::list_path(), "/sillas");
        assert_eq!(Motor::list_path(), "/motores");
    }

    fn reads_from_form<R>()
    where
        R: Controller,
        R::Create: FormInput,
        R::Update: FormInput,
    {
    }

    #[test]
    fn write_dtos_are_form_inputs() {
        reads_from_form::<Computer>();
        reads_from_form::<Folder>();
        reads_from_form::<Chair>();
        reads_from_form::<Motor>();
    }
}
