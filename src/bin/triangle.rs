extern crate failure;
extern crate gl;
extern crate opengl_lessons;
extern crate sdl2;

use failure::err_msg;
use opengl_lessons::debug;
use opengl_lessons::render_gl;
use std::ffi::CString;

const VERTEX_SOURCE: &'static str = "#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}";

const FRAGMENT_SOURCE: &'static str = "#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(0.8, 0.3, 0.02, 1.0);
}";

fn main() {
    if let Err(e) = run() {
        println!("{}", debug::failure_to_string(e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), failure::Error> {
    let sdl = sdl2::init().map_err(err_msg)?;
    let video_subsystem = sdl.video().map_err(err_msg)?;

    let gl_attr = video_subsystem.gl_attr();
    gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
    gl_attr.set_context_version(3, 3);

    let window = video_subsystem
        .window("Triangle", 800, 800)
        .opengl()
        .resizable()
        .build()?;

    let _gl_context = window.gl_create_context().map_err(err_msg)?;
    let gl = gl::Gl::load_with(|s| {
        video_subsystem.gl_get_proc_address(s) as *const std::os::raw::c_void
    });

    unsafe {
        gl.Viewport(0, 0, 800, 800);
    }

    let vert_shader = render_gl::Shader::from_vert_source(&gl, &CString::new(VERTEX_SOURCE)?)?;
    let frag_shader = render_gl::Shader::from_frag_source(&gl, &CString::new(FRAGMENT_SOURCE)?)?;
    let shader_program = render_gl::Program::from_shaders(&gl, &[vert_shader, frag_shader])?;

    let vertices = triangle_vertices();

    let vao = render_gl::VertexArray::new(&gl);
    vao.bind();

    let vbo = render_gl::VertexBuffer::new(&gl);
    vbo.bind();
    vbo.static_draw_data(&vertices);

    unsafe {
        gl.EnableVertexAttribArray(0);
        gl.VertexAttribPointer(
            0,
            3,
            gl::FLOAT,
            gl::FALSE,
            (3 * std::mem::size_of::<f32>()) as gl::types::GLint,
            std::ptr::null(),
        );
    }

    vbo.unbind();
    vao.unbind();

    let mut event_pump = sdl.event_pump().map_err(err_msg)?;
    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'main,
                _ => {}
            }
        }

        unsafe {
            gl.ClearColor(0.07, 0.13, 0.17, 1.0);
            gl.Clear(gl::COLOR_BUFFER_BIT);
        }

        shader_program.set_used();
        vao.bind();
        unsafe {
            gl.DrawArrays(gl::TRIANGLES, 0, 3);
        }

        window.gl_swap_window();
    }

    Ok(())
}

/// Equilateral triangle with side 1, centered on the origin.
fn triangle_vertices() -> Vec<f32> {
    let h = 3.0_f32.sqrt() / 3.0;
    vec![
        -0.5, -0.5 * h, 0.0,
         0.5, -0.5 * h, 0.0,
         0.0,        h, 0.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::triangle_vertices;

    fn dist(a: &[f32], b: &[f32]) -> f32 {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
    }

    #[test]
    fn triangle_is_equilateral_with_unit_sides() {
        let v = triangle_vertices();
        assert_eq!(v.len(), 9);

        let (a, b, c) = (&v[0..3], &v[3..6], &v[6..9]);
        assert!((dist(a, b) - 1.0).abs() < 1e-6);
        assert!((dist(b, c) - 1.0).abs() < 1e-6);
        assert!((dist(c, a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn triangle_is_centered_on_the_origin() {
        let v = triangle_vertices();
        for axis in 0..3 {
            let sum: f32 = (0..3).map(|i| v[i * 3 + axis]).sum();
            assert!(sum.abs() < 1e-6);
        }
    }
}
