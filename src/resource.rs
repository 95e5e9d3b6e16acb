//! Shader and program objects that delete themselves when dropped.
//!
//! Locals drop in reverse declaration order, so an early return releases
//! the program before the shaders it was built from.

use crate::gl_api::{GlApi, ShaderStage};

pub struct ShaderObject<'gl, G: GlApi + ?Sized> {
    gl: &'gl G,
    stage: ShaderStage,
    handle: G::Shader,
}

impl<'gl, G: GlApi + ?Sized> ShaderObject<'gl, G> {
    pub fn create(gl: &'gl G, stage: ShaderStage) -> Result<Self, String> {
        let handle = gl.create_shader(stage)?;
        log::debug!("created {stage} shader {handle:?}");
        Ok(ShaderObject { gl, stage, handle })
    }

    pub fn handle(&self) -> G::Shader {
        self.handle
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }
}

impl<G: GlApi + ?Sized> Drop for ShaderObject<'_, G> {
    fn drop(&mut self) {
        log::debug!("deleting {} shader {:?}", self.stage, self.handle);
        self.gl.delete_shader(self.handle);
    }
}

pub struct ProgramObject<'gl, G: GlApi + ?Sized> {
    gl: &'gl G,
    handle: G::Program,
}

impl<'gl, G: GlApi + ?Sized> ProgramObject<'gl, G> {
    pub fn create(gl: &'gl G) -> Result<Self, String> {
        let handle = gl.create_program()?;
        log::debug!("created program {handle:?}");
        Ok(ProgramObject { gl, handle })
    }

    pub fn handle(&self) -> G::Program {
        self.handle
    }

    pub fn attach(&self, shader: &ShaderObject<'gl, G>) {
        self.gl.attach_shader(self.handle, shader.handle());
    }
}

impl<G: GlApi + ?Sized> Drop for ProgramObject<'_, G> {
    fn drop(&mut self) {
        log::debug!("deleting program {:?}", self.handle);
        self.gl.delete_program(self.handle);
    }
}
